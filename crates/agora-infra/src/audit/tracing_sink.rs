//! Audit sink that writes to the tracing subscriber.

use agora_core::domain::ModerationRecord;
use agora_core::ports::AuditSink;

/// Target used for audit events, so they can be filtered separately
/// (e.g. `RUST_LOG=agora::audit=info`).
pub const AUDIT_TARGET: &str = "agora::audit";

/// Emits each moderation record as an `info` event on [`AUDIT_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: &ModerationRecord) {
        tracing::info!(
            target: AUDIT_TARGET,
            moderator = %record.moderator,
            moderator_name = %record.moderator_name,
            author = %record.author,
            post_id = record.post_id,
            at = %record.at.to_rfc3339(),
            "{record}"
        );
    }
}
