//! Header bar with the app title.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    colors::YELLOW,
    config::{HEADER_HEIGHT, HEADER_TITLE_POS, SCREEN_WIDTH},
    strings::StringId,
    styles::{CENTERED_MIDDLE, TITLE_STYLE},
};

const HEADER_RECT_POS: Point = Point::new(0, 0);
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(YELLOW);

/// Draw the full-width yellow header with the app name centred.
pub fn draw_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style(StringId::AppName.text(), HEADER_TITLE_POS, TITLE_STYLE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
