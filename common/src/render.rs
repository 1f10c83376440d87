//! Render state tracking for conditional redraws.
//!
//! The lemonade screen is static between activations, so it is only drawn when
//! something visible changed:
//!
//! | Trigger | Why |
//! |---------|-----|
//! | First frame | Nothing on the display yet |
//! | Display cleared | Page switch wiped the screen |
//! | Stage changed | New picture and caption |
//!
//! The debug page redraws every frame and does not use this tracking.

use crate::stage::Stage;

/// Tracks what is currently on the display.
pub struct RenderState {
    /// Stage drawn by the last lemonade screen redraw.
    drawn_stage: Option<Stage>,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g., page switch).
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            drawn_stage: None,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the lemonade screen needs redrawing for `stage`.
    ///
    /// Records `stage` as drawn, so a second call in the same frame with the
    /// same stage only reports dirty because of first-frame or clear flags.
    pub fn check_screen_dirty(
        &mut self,
        stage: Stage,
    ) -> bool {
        let dirty = self.first_frame || self.display_cleared || self.drawn_stage != Some(stage);
        self.drawn_stage = Some(stage);
        dirty
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Mark that the display was cleared externally.
    ///
    /// Call this when `display.clear()` is called due to page switching.
    pub fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.drawn_stage = None;
    }

    /// Call at end of frame to reset per-frame state.
    pub fn end_frame(&mut self) {
        self.first_frame = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame());
    }

    #[test]
    fn test_dirty_on_first_frame() {
        let mut state = RenderState::new();
        assert!(state.check_screen_dirty(Stage::Tree));
    }

    #[test]
    fn test_clean_when_stage_unchanged() {
        let mut state = RenderState::new();
        state.check_screen_dirty(Stage::Tree);
        state.end_frame();
        assert!(!state.check_screen_dirty(Stage::Tree));
        state.end_frame();
        assert!(!state.check_screen_dirty(Stage::Tree));
    }

    #[test]
    fn test_dirty_on_stage_change() {
        let mut state = RenderState::new();
        state.check_screen_dirty(Stage::Tree);
        state.end_frame();
        assert!(state.check_screen_dirty(Stage::Lemon));
        state.end_frame();
        assert!(!state.check_screen_dirty(Stage::Lemon));
    }

    #[test]
    fn test_dirty_after_display_cleared() {
        let mut state = RenderState::new();
        state.check_screen_dirty(Stage::Glass);
        state.end_frame();

        state.mark_display_cleared();
        assert!(state.check_screen_dirty(Stage::Glass));
        state.end_frame();
        assert!(!state.check_screen_dirty(Stage::Glass));
    }

    #[test]
    fn test_end_frame_clears_flags() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(!state.is_first_frame());
    }
}
