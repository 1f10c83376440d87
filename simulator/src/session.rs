//! Simulator session: window events in, stage transitions and counters out.
//!
//! [`translate_event`] maps SDL2 events to [`EventAction`]s and
//! [`Session::apply_input`] runs one input through the stage machine, page
//! navigation and bookkeeping. Neither touches the window, so both are tested
//! without SDL2 video.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent};
use lemonade_common::input::{Input, InputResult, process_input};
use lemonade_common::log::TransitionLog;
use lemonade_common::render::RenderState;
use lemonade_common::screen::draw_screen;
use lemonade_common::{Page, StageMachine};
use tracing::{debug, info};

use crate::metrics::SessionMetrics;
use crate::screens::draw_debug_page;

/// What a window event asks the loop to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventAction {
    Quit,
    Input(Input),
}

/// Map a window event to an action. Unhandled events and key repeats yield `None`.
pub fn translate_event(event: SimulatorEvent) -> Option<EventAction> {
    match event {
        SimulatorEvent::Quit
        | SimulatorEvent::KeyDown {
            keycode: Keycode::Escape,
            ..
        } => Some(EventAction::Quit),
        SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(EventAction::Input(Input::Tap(point))),
        SimulatorEvent::KeyDown {
            keycode, repeat: false, ..
        } => match keycode {
            Keycode::Space | Keycode::Return => Some(EventAction::Input(Input::Select)),
            Keycode::Y => Some(EventAction::Input(Input::PageButton)),
            _ => None,
        },
        _ => None,
    }
}

/// All state owned by the event loop.
pub struct Session {
    pub machine: StageMachine,
    pub page: Page,
    pub render_state: RenderState,
    pub metrics: SessionMetrics,
    pub log: TransitionLog,
}

impl Session {
    pub fn new() -> Self {
        let mut log = TransitionLog::new();
        log.push("Started at Tree");

        Self {
            machine: StageMachine::new(),
            page: Page::default(),
            render_state: RenderState::new(),
            metrics: SessionMetrics::new(),
            log,
        }
    }

    /// Process one input: advance the stage, switch page, or count an ignored tap.
    pub fn apply_input(
        &mut self,
        input: Input,
    ) -> InputResult {
        let result = process_input(input, self.page);

        if result.activate {
            self.advance_stage();
        }

        if let Some(page) = result.new_page {
            self.page = page;
            self.render_state.mark_display_cleared();
            self.log.push(match page {
                Page::Lemonade => "Page: Lemonade",
                Page::Debug => "Page: Debug",
            });
            debug!(?page, "page switched");
        }

        if let Input::Tap(point) = input
            && result.is_ignored()
        {
            self.metrics.ignored_taps = self.metrics.ignored_taps.wrapping_add(1);
            debug!(x = point.x, y = point.y, "tap outside picture ignored");
        }

        result
    }

    /// Draw the current page. The lemonade screen is skipped when unchanged.
    pub fn render(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
    ) {
        match self.page {
            Page::Lemonade => {
                let stage = self.machine.current();
                if self.render_state.check_screen_dirty(stage) {
                    draw_screen(display, stage);
                    self.metrics.screen_redraws = self.metrics.screen_redraws.wrapping_add(1);
                }
            }
            Page::Debug => draw_debug_page(display, &self.machine, &self.metrics, &self.log),
        }
        self.render_state.end_frame();
    }

    fn advance_stage(&mut self) {
        let from = self.machine.current();
        let to = self.machine.activate();
        self.metrics.activations = self.metrics.activations.wrapping_add(1);
        self.log.push_transition(self.metrics.activations, from, to);

        info!(
            from = from.name(),
            to = to.name(),
            image = ?to.image(),
            description = to.description().text(),
            instructions = to.instructions().text(),
            "stage advanced"
        );
    }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use embedded_graphics_simulator::sdl2::Mod;
    use lemonade_common::Stage;
    use lemonade_common::config::TAP_AREA;

    use super::*;

    fn key_down(
        keycode: Keycode,
        repeat: bool,
    ) -> SimulatorEvent {
        SimulatorEvent::KeyDown {
            keycode,
            keymod: Mod::empty(),
            repeat,
        }
    }

    #[test]
    fn test_translate_quit_and_escape() {
        assert_eq!(translate_event(SimulatorEvent::Quit), Some(EventAction::Quit));
        assert_eq!(translate_event(key_down(Keycode::Escape, false)), Some(EventAction::Quit));
    }

    #[test]
    fn test_translate_left_release_is_tap() {
        let point = Point::new(10, 20);
        let event = SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        };
        assert_eq!(translate_event(event), Some(EventAction::Input(Input::Tap(point))));

        let right = SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Right,
            point,
        };
        assert_eq!(translate_event(right), None);
    }

    #[test]
    fn test_translate_select_keys_ignore_repeats() {
        let select = Some(EventAction::Input(Input::Select));
        assert_eq!(translate_event(key_down(Keycode::Space, false)), select);
        assert_eq!(translate_event(key_down(Keycode::Return, false)), select);
        assert_eq!(translate_event(key_down(Keycode::Space, true)), None);
    }

    #[test]
    fn test_translate_page_key() {
        assert_eq!(
            translate_event(key_down(Keycode::Y, false)),
            Some(EventAction::Input(Input::PageButton))
        );
        assert_eq!(translate_event(key_down(Keycode::Q, false)), None);
    }

    #[test]
    fn test_ignored_tap_counted_without_advancing() {
        let mut session = Session::new();
        let result = session.apply_input(Input::Tap(Point::new(0, 0)));

        assert!(result.is_ignored());
        assert_eq!(session.metrics.ignored_taps, 1);
        assert_eq!(session.metrics.activations, 0);
        assert_eq!(session.machine.current(), Stage::Tree);
    }

    #[test]
    fn test_activation_logs_transition() {
        let mut session = Session::new();
        session.apply_input(Input::Tap(TAP_AREA.center()));

        assert_eq!(session.machine.current(), Stage::Lemon);
        assert_eq!(session.metrics.activations, 1);
        assert_eq!(session.metrics.ignored_taps, 0);
        assert_eq!(session.log.iter().last(), Some("#1 Tree -> Lemon"));

        session.apply_input(Input::Select);
        assert_eq!(session.log.iter().last(), Some("#2 Lemon -> Lemonade"));
    }

    #[test]
    fn test_page_switch_forces_redraw() {
        let mut session = Session::new();
        let stage = session.machine.current();
        assert!(session.render_state.check_screen_dirty(stage));
        session.render_state.end_frame();
        assert!(!session.render_state.check_screen_dirty(stage));

        session.apply_input(Input::PageButton);
        assert_eq!(session.page, Page::Debug);
        session.render_state.end_frame();

        session.apply_input(Input::PageButton);
        assert_eq!(session.page, Page::Lemonade);
        assert!(session.render_state.check_screen_dirty(stage));
    }

    #[test]
    fn test_debug_page_blocks_activation() {
        let mut session = Session::new();
        session.apply_input(Input::PageButton);
        session.apply_input(Input::Select);
        session.apply_input(Input::Tap(TAP_AREA.center()));

        assert_eq!(session.machine.current(), Stage::Tree);
        assert_eq!(session.metrics.ignored_taps, 1);
    }

    #[test]
    fn test_counters_wrap_instead_of_overflowing() {
        let mut session = Session::new();
        session.metrics.activations = u32::MAX;
        session.metrics.ignored_taps = u32::MAX;

        session.apply_input(Input::Select);
        session.apply_input(Input::Tap(Point::new(0, 0)));

        assert_eq!(session.metrics.activations, 0);
        assert_eq!(session.metrics.ignored_taps, 0);
        assert_eq!(session.log.iter().last(), Some("#0 Tree -> Lemon"));
    }
}
