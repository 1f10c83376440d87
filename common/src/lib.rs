//! Platform-agnostic core of the Lemonade screen.
//!
//! This crate contains everything that does not depend on a window or a
//! display driver:
//!
//! - [`stage`]: the four-stage cycle and its `StageMachine`
//! - [`strings`]: string resources (title, content descriptions, instructions)
//! - [`colors`]: RGB565 palette
//! - [`config`]: screen size and pre-computed layout constants
//! - [`styles`]: pre-computed text styles
//! - [`pages`]: page navigation enum
//! - [`input`]: raw input to action mapping
//! - [`render`]: redraw tracking
//! - [`log`]: transition log ring buffer for the debug page
//! - [`widgets`] and [`screen`]: drawing, generic over `DrawTarget<Color = Rgb565>`
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates. Tests run on the
//! host with the standard harness.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod input;
pub mod log;
pub mod pages;
pub mod render;
pub mod screen;
pub mod stage;
pub mod strings;
pub mod styles;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_display;

// Re-export commonly used items
pub use pages::Page;
pub use stage::{Picture, Stage, StageAttributes, StageMachine};
pub use strings::StringId;
