//! Transition log for the debug page.
//!
//! A fixed-size ring buffer of short text lines. Each activation pushes a line
//! such as `#12 Lemon -> Lemonade`; the debug page renders them oldest first.

use heapless::{Deque, String};

use crate::stage::Stage;

// =============================================================================
// Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 36;

// =============================================================================
// Transition Log Ring Buffer
// =============================================================================

/// Ring buffer of the most recent log lines.
///
/// Old lines are dropped once `LOG_BUFFER_SIZE` is reached.
pub struct TransitionLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl TransitionLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a free-form message, truncated to fit a line.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Push a `#<seq> <from> -> <to>` line.
    pub fn push_transition(
        &mut self,
        seq: u32,
        from: Stage,
        to: Stage,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        line.push('#').ok();
        push_u32(&mut line, seq);
        line.push(' ').ok();
        line.push_str(from.name()).ok();
        line.push_str(" -> ").ok();
        line.push_str(to.name()).ok();
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Iterate over log lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for TransitionLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}
