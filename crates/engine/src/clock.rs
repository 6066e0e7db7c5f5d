//! Monotonic insert clock
//!
//! `created_at` stamps must be monotonically non-decreasing even if the
//! wall clock steps backwards (NTP adjustments). The clock remembers the
//! last stamp it handed out and never goes below it.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Wall-clock source that never moves backwards
pub struct MonotonicClock {
    last: Mutex<DateTime<Utc>>,
}

impl MonotonicClock {
    /// Create a clock starting from the current wall time
    pub fn new() -> Self {
        Self {
            last: Mutex::new(Utc::now()),
        }
    }

    /// Current UTC time, clamped to be >= every previous stamp
    pub fn now(&self) -> DateTime<Utc> {
        let mut last = self.last.lock();
        let now = Utc::now().max(*last);
        *last = now;
        now
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
