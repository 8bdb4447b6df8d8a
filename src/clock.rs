//! Periodic timers in simulated time

use std::time::Duration;

/// Fires every `period` of simulated time while running.
///
/// Time is supplied by the owner as an offset from the start of the session,
/// so the same ticker behaves identically under a real clock and in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    period: Duration,
    next_due: Duration,
    running: bool,
}

impl Ticker {
    /// Create a running ticker whose first firing is one period after `now`.
    pub fn new(period: Duration, now: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
            running: true,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)start the ticker; the first firing is one full period after `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = now + self.period;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.running && self.next_due <= now
    }

    /// Consume one firing.
    pub fn fire(&mut self) {
        self.next_due += self.period;
    }
}
