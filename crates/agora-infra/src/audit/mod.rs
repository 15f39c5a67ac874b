//! Audit sinks for moderation records.

mod memory;
mod tracing_sink;

pub use memory::InMemoryAuditLog;
pub use tracing_sink::{AUDIT_TARGET, TracingAuditSink};
