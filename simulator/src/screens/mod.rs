//! Screens that only exist in the simulator.

mod debug;

pub use debug::draw_debug_page;
