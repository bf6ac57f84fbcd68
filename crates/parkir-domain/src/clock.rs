//! Time source seam
//!
//! Domain operations take `now` as a parameter. The application layer
//! owns a [`Clock`] and reads it at the boundary.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};
use parkir_types::{Error, Result};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Used by tests and script replay.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Move the clock forward (or back) and return the new time.
    /// Fails without moving if the result is outside chrono's range.
    pub fn advance(&self, by: Duration) -> Result<DateTime<Utc>> {
        let now = self
            .now
            .get()
            .checked_add_signed(by)
            .ok_or_else(|| Error::InvalidInput(format!("cannot advance the clock by {}", by)))?;
        self.now.set(now);
        Ok(now)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
