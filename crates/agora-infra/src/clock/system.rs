//! Wall-clock time source.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use agora_core::ports::Clock;

/// System clock that never goes backwards.
///
/// If the host clock is adjusted into the past, the last reading is repeated
/// until real time catches up. Readings have millisecond precision.
pub struct SystemClock {
    last_millis: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last_millis: AtomicI64::new(i64::MIN),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let current = Utc::now().timestamp_millis();
        let previous = self.last_millis.fetch_max(current, Ordering::Relaxed);
        let millis = previous.max(current);

        DateTime::from_timestamp_millis(millis).unwrap_or_else(|| {
            tracing::warn!(millis, "Clock reading out of range, using raw system time");
            Utc::now()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_do_not_go_backwards() {
        let clock = SystemClock::new();
        let mut last = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_holds_last_reading_when_host_clock_lags() {
        let clock = SystemClock::new();
        let ahead = Utc::now().timestamp_millis() + 60_000;
        clock.last_millis.store(ahead, Ordering::Relaxed);

        assert_eq!(clock.now().timestamp_millis(), ahead);
    }
}
