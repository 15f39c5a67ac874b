//! In-memory audit log.

use std::sync::{PoisonError, RwLock};

use agora_core::domain::ModerationRecord;
use agora_core::ports::AuditSink;

/// Keeps every moderation record in process memory, oldest first.
///
/// Note: Records are lost on process exit.
#[derive(Default)]
pub struct InMemoryAuditLog {
    records: RwLock<Vec<ModerationRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ModerationRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for InMemoryAuditLog {
    fn record(&self, record: &ModerationRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use agora_core::Network;
    use agora_core::domain::NewUser;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_collects_moderation_records() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let log = Arc::new(InMemoryAuditLog::new());
        let mut network = Network::new(Arc::new(ManualClock::new(start)), log.clone());

        let bob = network.register(NewUser::new(2, "Bob")).unwrap();
        let eve = network.register(NewUser::new(3, "Eve").moderator()).unwrap();
        let post = network.create_post(bob, "hi here.").unwrap();
        assert!(log.is_empty());

        network.moderator_delete_post(eve, post).unwrap();

        let records = log.records();
        assert_eq!(log.len(), 1);
        assert_eq!(records[0].moderator_name, "Eve");
        assert_eq!(records[0].author, bob);
        assert_eq!(records[0].at, start);
    }
}
