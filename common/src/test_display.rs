//! In-memory draw target for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Full-screen RGB565 framebuffer. Out-of-bounds pixels are discarded.
pub struct TestDisplay {
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
    }

    /// Count pixels of `color` inside the given rectangle.
    pub fn count_in(
        &self,
        top_left: Point,
        size: Size,
        color: Rgb565,
    ) -> usize {
        let mut count = 0;
        for y in top_left.y..top_left.y + size.height as i32 {
            for x in top_left.x..top_left.x + size.width as i32 {
                if self.pixel(x, y) == color {
                    count += 1;
                }
            }
        }
        count
    }

    /// Copy of the pixels inside the given rectangle, row-major.
    pub fn region(
        &self,
        top_left: Point,
        size: Size,
    ) -> Vec<Rgb565> {
        let mut out = Vec::with_capacity((size.width * size.height) as usize);
        for y in top_left.y..top_left.y + size.height as i32 {
            for x in top_left.x..top_left.x + size.width as i32 {
                out.push(self.pixel(x, y));
            }
        }
        out
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}
