//! Lemonade desktop simulator.
//!
//! Runs the lemonade screen in an SDL2 window via `embedded-graphics-simulator`.
//!
//! # Controls
//!
//! - Click the picture, or press Space/Enter: advance to the next stage
//! - `Y`: toggle the debug page
//! - `Escape` or closing the window: quit
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod metrics;
mod screens;
mod session;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use lemonade_common::StringId;
use lemonade_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::{EventAction, Session, translate_event};
use crate::timing::FRAME_TIME;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new(StringId::AppName.text(), &output_settings);

    let mut session = Session::new();

    info!(
        stage = session.machine.current().name(),
        description = session.machine.current().description().text(),
        "lemonade screen started"
    );

    'running: loop {
        let frame_start = Instant::now();

        session.render(&mut display);
        window.update(&display);

        for event in window.events() {
            match translate_event(event) {
                Some(EventAction::Quit) => break 'running,
                Some(EventAction::Input(input)) => {
                    session.apply_input(input);
                }
                None => {}
            }
        }

        session.metrics.total_frames = session.metrics.total_frames.wrapping_add(1);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    info!(
        activations = session.metrics.activations,
        final_stage = session.machine.current().name(),
        "lemonade screen closed"
    );
}
