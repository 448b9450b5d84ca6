//! Time source abstraction.
//!
//! The VWSP and the geometric mean depend on "now". Injecting the clock keeps
//! that dependency explicit and lets tests supply fixed timestamps instead of
//! relying on wall-clock time.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a caller-controlled instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        FixedClock { now: Cell::new(now) }
    }

    /// Moves the clock forward (or backward) by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
