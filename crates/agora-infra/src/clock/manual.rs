//! Manually driven clock.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use agora_core::ports::Clock;

/// Clock that only moves when told to. Used for reproducible runs.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move time forward. Negative durations are ignored.
    pub fn advance(&self, by: Duration) {
        if by < Duration::zero() {
            tracing::debug!(?by, "Ignoring attempt to move manual clock backwards");
            return;
        }
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
