//! Cancellable deadlines for the auto-convert debounce and the periodic
//! rate refresh.
//!
//! Neither type reads the clock. Callers pass `now`, which keeps the event
//! loop in charge of time and lets tests step a virtual clock.

use std::time::{Duration, Instant};

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Trailing-edge debounce: every `schedule` pushes the deadline out again.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires at most once per schedule.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Recurring refresh deadline. Fires once; the owner re-arms it after the
/// refresh has been applied.
#[derive(Clone, Debug)]
pub struct RefreshTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
