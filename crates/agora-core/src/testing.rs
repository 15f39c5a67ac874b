//! Test doubles for the ports.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{ModerationRecord, Network};
use crate::ports::{AuditSink, Clock};

pub(crate) struct StepClock {
    now: Mutex<DateTime<Utc>>,
}

impl StepClock {
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Default)]
pub(crate) struct RecordingAudit {
    records: Mutex<Vec<ModerationRecord>>,
}

impl RecordingAudit {
    pub(crate) fn records(&self) -> Vec<ModerationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for RecordingAudit {
    fn record(&self, record: &ModerationRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

pub(crate) fn test_network() -> (Network, Arc<StepClock>, Arc<RecordingAudit>) {
    let clock = Arc::new(StepClock {
        now: Mutex::new(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
    });
    let audit = Arc::new(RecordingAudit::default());
    let network = Network::new(clock.clone(), audit.clone());
    (network, clock, audit)
}
