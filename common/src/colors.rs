//! Color constants for the Lemonade screen.
//!
//! Rgb565 packs 5 bits red, 6 bits green and 5 bits blue, so custom colors are
//! written as `Rgb565::new(r >> 3, g >> 2, b >> 3)` of their 8-bit source.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Screen background and debug page text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Caption and title text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Header bar background.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Debug page headings and prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Picture border, RGB (105, 205, 216).
pub const BORDER_TEAL: Rgb565 = Rgb565::new(13, 51, 27);

/// Card surface, RGB (231, 224, 236).
pub const CARD_SURFACE: Rgb565 = Rgb565::new(28, 56, 29);

/// Divider lines on the debug page.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Debug log text.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

// =============================================================================
// Picture Palette
// =============================================================================

/// Lemon peel, RGB (255, 235, 59).
pub const LEMON: Rgb565 = Rgb565::new(31, 58, 7);

/// Lemon outline and pulp lines, RGB (200, 160, 0).
pub const LEMON_DARK: Rgb565 = Rgb565::new(25, 40, 0);

/// Lemonade in the glass, RGB (255, 241, 118).
pub const LEMONADE: Rgb565 = Rgb565::new(31, 60, 14);

/// Leaves and canopy, RGB (76, 175, 80).
pub const LEAF: Rgb565 = Rgb565::new(9, 43, 10);

/// Darker canopy shade, RGB (46, 125, 50).
pub const LEAF_DARK: Rgb565 = Rgb565::new(5, 31, 6);

/// Tree trunk, RGB (121, 85, 72).
pub const TRUNK: Rgb565 = Rgb565::new(15, 21, 9);

/// Glass outline, RGB (120, 144, 156).
pub const GLASS: Rgb565 = Rgb565::new(15, 36, 19);

/// Straw, RGB (229, 57, 53).
pub const STRAW: Rgb565 = Rgb565::new(28, 14, 6);
