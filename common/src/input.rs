//! Input handling.
//!
//! Converts raw inputs into UI actions: advancing the stage and switching
//! pages. Platform code is responsible for translating its own events (mouse,
//! touch, keys) into [`Input`] in display coordinates.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::ContainsPoint;

use crate::config::TAP_AREA;
use crate::pages::Page;

/// A single raw input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    /// Pointer released at a display coordinate.
    Tap(Point),
    /// Keyboard equivalent of tapping the picture.
    Select,
    /// Page switch button.
    PageButton,
}

/// Result of processing one input.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct InputResult {
    /// Advance the stage machine.
    pub activate: bool,
    /// New page if the page button was pressed.
    pub new_page: Option<Page>,
}

impl InputResult {
    /// Neither an activation nor a page change.
    #[inline]
    pub const fn is_ignored(&self) -> bool { !self.activate && self.new_page.is_none() }
}

/// Process one input against the current page.
///
/// Activation only happens on [`Page::Lemonade`], and a tap only counts when it
/// lands on the picture itself.
pub fn process_input(
    input: Input,
    current_page: Page,
) -> InputResult {
    let mut result = InputResult::default();

    match input {
        Input::Tap(point) => {
            result.activate = current_page == Page::Lemonade && TAP_AREA.contains(point);
        }
        Input::Select => {
            result.activate = current_page == Page::Lemonade;
        }
        Input::PageButton => {
            result.new_page = Some(current_page.toggle());
        }
    }

    result
}
