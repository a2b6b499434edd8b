//! Session clock
//!
//! Elapsed play time is accumulated from explicit ticks rather than read from
//! the wall clock, so sessions are deterministic under test and a stopped
//! clock can never be advanced by a late tick.

use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClock {
    elapsed: Duration,
    stopped: bool,
}

impl SessionClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` unless the clock has been stopped
    pub fn advance(&mut self, delta: Duration) {
        if !self.stopped {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Freeze the clock permanently
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole seconds elapsed
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}
