//! Fixed-rate frame pacing
//!
//! The event loop sleeps until `deadline()`; it never spins.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    /// First frame is due immediately
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the next frame after one ran at `now`
    ///
    /// Keeps a steady cadence, but after a stall of more than one period it
    /// restarts from `now` instead of running a burst of catch-up frames.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }
}
