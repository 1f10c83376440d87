//! Screen size and pre-computed layout constants.
//!
//! The screen is a portrait column: a header bar, then a body centred in the
//! remaining space. The body is a card holding the bordered picture, followed
//! by the instructions caption.
//!
//! ```text
//! +--------------------------+  0
//! |         Lemonade         |  HEADER_HEIGHT
//! +--------------------------+
//! |                          |
//! |     +--------------+     |  CARD_Y
//! |     | +----------+ |     |
//! |     | | picture  | |     |  PICTURE_Y
//! |     | +----------+ |     |
//! |     +--------------+     |
//! |   caption line one       |  CAPTION_Y
//! |   caption line two       |
//! +--------------------------+  SCREEN_HEIGHT
//! ```
//!
//! Everything is `const` so the renderer does no layout arithmetic per frame.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Screen centre X. Used for centring the title and caption lines.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Header
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 28;

/// Centre of the header title.
pub const HEADER_TITLE_POS: Point = Point::new(CENTER_X, (HEADER_HEIGHT / 2) as i32);

// =============================================================================
// Body
// =============================================================================

/// Horizontal padding of the body column.
pub const BODY_PADDING_X: u32 = 12;

/// Usable width of the body column.
pub const BODY_WIDTH: u32 = SCREEN_WIDTH - 2 * BODY_PADDING_X;

/// Height available below the header.
pub const BODY_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT;

/// Side length of every picture.
pub const PICTURE_SIZE: u32 = 120;

/// Padding between the border and the picture.
pub const IMAGE_PADDING: u32 = 8;

/// Border stroke width around the padded picture.
pub const BORDER_WIDTH: u32 = 1;

/// Side length of the card (picture + padding + border).
pub const CARD_SIZE: u32 = PICTURE_SIZE + 2 * (IMAGE_PADDING + BORDER_WIDTH);

/// Corner radius of the card.
pub const CARD_CORNER_RADIUS: u32 = 14;

/// Gap between the card and the caption.
pub const SPACER_HEIGHT: u32 = 8;

// =============================================================================
// Caption
// =============================================================================

/// Width of one caption glyph (`FONT_7X13`).
pub const CAPTION_CHAR_WIDTH: u32 = 7;

/// Vertical distance between caption lines.
pub const CAPTION_LINE_HEIGHT: u32 = 15;

/// Characters that fit on one caption line.
pub const CAPTION_MAX_CHARS: usize = (BODY_WIDTH / CAPTION_CHAR_WIDTH) as usize;

/// Hard limit on wrapped caption lines. Extra text is dropped.
pub const MAX_CAPTION_LINES: usize = 3;

/// Caption lines reserved when centring the body vertically.
const CAPTION_RESERVED_LINES: u32 = 2;

/// Height of the centred body block.
pub const CONTENT_HEIGHT: u32 = CARD_SIZE + SPACER_HEIGHT + CAPTION_RESERVED_LINES * CAPTION_LINE_HEIGHT;

// =============================================================================
// Pre-computed Positions
// =============================================================================

/// Card top-left X.
pub const CARD_X: i32 = ((SCREEN_WIDTH - CARD_SIZE) / 2) as i32;

/// Card top-left Y.
pub const CARD_Y: i32 = (HEADER_HEIGHT + (BODY_HEIGHT - CONTENT_HEIGHT) / 2) as i32;

/// Card bounds. The border is drawn on the outermost pixels.
pub const CARD_AREA: Rectangle = Rectangle::new(Point::new(CARD_X, CARD_Y), Size::new(CARD_SIZE, CARD_SIZE));

/// Picture top-left X.
pub const PICTURE_X: i32 = CARD_X + (BORDER_WIDTH + IMAGE_PADDING) as i32;

/// Picture top-left Y.
pub const PICTURE_Y: i32 = CARD_Y + (BORDER_WIDTH + IMAGE_PADDING) as i32;

/// Picture top-left corner.
pub const PICTURE_ORIGIN: Point = Point::new(PICTURE_X, PICTURE_Y);

/// Region that turns a tap into an activate event. Excludes border and padding.
pub const TAP_AREA: Rectangle = Rectangle::new(PICTURE_ORIGIN, Size::new(PICTURE_SIZE, PICTURE_SIZE));

/// Top of the first caption line.
pub const CAPTION_Y: i32 = CARD_Y + (CARD_SIZE + SPACER_HEIGHT) as i32;
