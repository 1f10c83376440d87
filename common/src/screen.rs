//! Full lemonade screen rendering.
//!
//! Draws the header, card, picture and caption for a [`Stage`]. The screen is
//! fully repainted on every call; callers use
//! [`RenderState`](crate::render::RenderState) to skip unchanged frames.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::WHITE;
use crate::config::PICTURE_ORIGIN;
use crate::stage::Stage;
use crate::widgets::{draw_caption, draw_card, draw_header, draw_picture};

/// Paint the lemonade screen for `stage`.
pub fn draw_screen<D>(
    display: &mut D,
    stage: Stage,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let attributes = stage.attributes();

    display.clear(WHITE).ok();
    draw_header(display);
    draw_card(display);
    draw_picture(display, attributes.image, PICTURE_ORIGIN);
    draw_caption(display, attributes.instructions.text());
}
