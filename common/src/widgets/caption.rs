//! Word-wrapped instructions caption below the card.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::Vec;

use crate::{
    config::{CAPTION_LINE_HEIGHT, CAPTION_MAX_CHARS, CAPTION_Y, CENTER_X, MAX_CAPTION_LINES},
    styles::{CAPTION_STYLE, CENTERED_TOP},
};

/// Greedy word wrap into at most `MAX_CAPTION_LINES` lines of `max_chars`.
///
/// Lines borrow from `text`. Breaks at the last space that fits; a word longer
/// than a whole line is split mid-word. Text past the last line is dropped.
pub fn wrap_lines(
    text: &str,
    max_chars: usize,
) -> Vec<&str, MAX_CAPTION_LINES> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    let mut rest = text.trim();
    while !rest.is_empty() {
        // Byte index of the first char that does not fit
        let Some((limit, _)) = rest.char_indices().nth(max_chars) else {
            lines.push(rest).ok();
            break;
        };

        let split = if rest[limit..].starts_with(' ') {
            Some(limit)
        } else {
            rest[..limit].rfind(' ')
        };

        let (line, tail) = match split {
            Some(i) if i > 0 => rest.split_at(i),
            _ => rest.split_at(limit),
        };

        if lines.push(line.trim_end()).is_err() {
            break;
        }
        rest = tail.trim_start();
    }

    lines
}

/// Draw `text` wrapped and centred, starting at `CAPTION_Y`.
pub fn draw_caption<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = CAPTION_Y;
    for line in wrap_lines(text, CAPTION_MAX_CHARS) {
        Text::with_text_style(line, Point::new(CENTER_X, y), CAPTION_STYLE, CENTERED_TOP)
            .draw(display)
            .ok();
        y += CAPTION_LINE_HEIGHT as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::{BODY_PADDING_X, BODY_WIDTH};
    use crate::stage::Stage;
    use crate::test_display::TestDisplay;

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_lines("Tap the lemonade to drink it", 30);
        assert_eq!(lines.as_slice(), ["Tap the lemonade to drink it"]);
    }

    #[test]
    fn test_breaks_at_space_on_limit() {
        let lines = wrap_lines("Tap the lemon tree to select a lemon", 30);
        assert_eq!(lines.as_slice(), ["Tap the lemon tree to select a", "lemon"]);
    }

    #[test]
    fn test_breaks_at_last_space_before_limit() {
        let lines = wrap_lines("Keep tapping the lemon to squeeze it", 30);
        assert_eq!(lines.as_slice(), ["Keep tapping the lemon to", "squeeze it"]);
    }

    #[test]
    fn test_long_word_split() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines.as_slice(), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_excess_lines_dropped() {
        let lines = wrap_lines("a b c d e f g h", 1);
        assert_eq!(lines.len(), MAX_CAPTION_LINES);
        assert_eq!(lines.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_and_zero_width() {
        assert!(wrap_lines("", 30).is_empty());
        assert!(wrap_lines("   ", 30).is_empty());
        assert!(wrap_lines("text", 0).is_empty());
    }

    #[test]
    fn test_instructions_wrap_keeps_words() {
        for stage in Stage::ALL {
            let text = stage.instructions().text();
            let lines = wrap_lines(text, CAPTION_MAX_CHARS);
            assert!(lines.len() <= 2, "{text:?} needs more than two lines");
            for line in &lines {
                assert!(line.len() <= CAPTION_MAX_CHARS);
            }

            let rejoined: std::vec::Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: std::vec::Vec<&str> = text.split(' ').collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn test_caption_drawn_inside_body() {
        let mut display = TestDisplay::new();
        display.clear(WHITE).ok();
        draw_caption(&mut display, Stage::Tree.instructions().text());

        let area_top = Point::new(0, CAPTION_Y);
        let area = Size::new(BODY_PADDING_X, CAPTION_LINE_HEIGHT * 2);
        assert_eq!(display.count_in(area_top, area, BLACK), 0, "left padding must stay clear");

        let body = Size::new(BODY_WIDTH, CAPTION_LINE_HEIGHT * 2);
        let body_top = Point::new(BODY_PADDING_X as i32, CAPTION_Y);
        assert!(display.count_in(body_top, body, BLACK) > 0);
    }
}
