//! Rounded card with the bordered picture frame.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, RoundedRectangle, StrokeAlignment},
};

use crate::{
    colors::{BORDER_TEAL, CARD_SURFACE},
    config::{BORDER_WIDTH, CARD_AREA, CARD_CORNER_RADIUS},
};

const CARD_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CARD_SURFACE);

/// Card outline. Fill and border share it so the border follows the rounded corners.
fn card_shape() -> RoundedRectangle { RoundedRectangle::with_equal_corners(CARD_AREA, Size::new_equal(CARD_CORNER_RADIUS)) }

/// Draw the card surface and the teal border around the picture padding.
///
/// The picture itself is drawn afterwards by [`super::draw_picture`].
pub fn draw_card<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let shape = card_shape();

    shape.into_styled(CARD_FILL_STYLE).draw(display).ok();

    let border_style = PrimitiveStyleBuilder::new()
        .stroke_color(BORDER_TEAL)
        .stroke_width(BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    shape.into_styled(border_style).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::ContainsPoint;

    use super::*;
    use crate::colors::BLACK;
    use crate::config::{CARD_SIZE, CARD_X, CARD_Y};
    use crate::test_display::TestDisplay;

    #[test]
    fn test_border_on_straight_edges() {
        let mut display = TestDisplay::new();
        draw_card(&mut display);

        let last = CARD_SIZE as i32 - 1;
        let mid = last / 2;
        assert_eq!(display.pixel(CARD_X + mid, CARD_Y), BORDER_TEAL);
        assert_eq!(display.pixel(CARD_X + mid, CARD_Y + last), BORDER_TEAL);
        assert_eq!(display.pixel(CARD_X, CARD_Y + mid), BORDER_TEAL);
        assert_eq!(display.pixel(CARD_X + last, CARD_Y + mid), BORDER_TEAL);
    }

    #[test]
    fn test_corners_are_rounded() {
        let mut display = TestDisplay::new();
        draw_card(&mut display);

        let last = CARD_SIZE as i32 - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last), (1, 1)] {
            assert_eq!(
                display.pixel(CARD_X + x, CARD_Y + y),
                BLACK,
                "corner pixel ({x}, {y}) should stay outside the card"
            );
        }
    }

    #[test]
    fn test_border_stays_inside_rounded_card() {
        let mut display = TestDisplay::new();
        draw_card(&mut display);

        let shape = card_shape();
        let mut teal = 0;
        for y in CARD_Y..CARD_Y + CARD_SIZE as i32 {
            for x in CARD_X..CARD_X + CARD_SIZE as i32 {
                if display.pixel(x, y) == BORDER_TEAL {
                    teal += 1;
                    assert!(shape.contains(Point::new(x, y)), "border pixel ({x}, {y}) outside the card");
                }
            }
        }
        assert!(teal > 0);
    }

    #[test]
    fn test_padding_uses_card_surface() {
        let mut display = TestDisplay::new();
        draw_card(&mut display);

        assert_eq!(display.pixel(CARD_X + CARD_SIZE as i32 / 2, CARD_Y + 4), CARD_SURFACE);
        assert_eq!(display.pixel(CARD_X + 4, CARD_Y + CARD_SIZE as i32 / 2), CARD_SURFACE);
        // Just inside the rounded corner
        assert_eq!(display.pixel(CARD_X + 8, CARD_Y + 8), CARD_SURFACE);
    }
}
