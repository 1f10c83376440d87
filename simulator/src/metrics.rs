//! Session counters shown on the debug page.

use std::time::{Duration, Instant};

use heapless::String;
use lemonade_common::log::push_u32;

/// Counters for the current run.
pub struct SessionMetrics {
    pub activations: u32,
    pub ignored_taps: u32,
    pub screen_redraws: u32,
    pub total_frames: u64,

    start_time: Instant,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            activations: 0,
            ignored_taps: 0,
            screen_redraws: 0,
            total_frames: 0,
            start_time: Instant::now(),
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for SessionMetrics {
    fn default() -> Self { Self::new() }
}

fn push_two_digits(
    s: &mut String<12>,
    val: u64,
) {
    if val < 10 {
        s.push('0').ok();
    }
    push_u32(s, val as u32);
}

fn format_hms(secs: u64) -> String<12> {
    let hours = (secs / 3600).min(u64::from(u32::MAX));
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    let mut s = String::new();
    push_two_digits(&mut s, hours);
    s.push(':').ok();
    push_two_digits(&mut s, mins);
    s.push(':').ok();
    push_two_digits(&mut s, secs);
    s
}
