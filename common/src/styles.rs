//! Pre-computed static text styles.
//!
//! Styles are `const` so draw functions never build them per frame. Callers
//! that need a dynamic color use [`LABEL_FONT`] with `MonoTextStyle::new`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centred horizontally and vertically on the anchor point. Used for the header title.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Centred horizontally, anchor at the top of the glyphs. Used for caption lines.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels) for the debug page.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Header title (`ProFont` 18pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);

/// Instructions caption (7x13 pixels).
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, BLACK);

/// Small white text for the debug page.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
