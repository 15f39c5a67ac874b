use crate::domain::ModerationRecord;

/// Destination for moderation audit records.
pub trait AuditSink: Send + Sync {
    /// Record that a moderator deleted a post.
    fn record(&self, record: &ModerationRecord);
}
