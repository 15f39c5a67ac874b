//! # Agora Infrastructure
//!
//! Concrete implementations of the ports defined in `agora-core`:
//! time sources and moderation audit sinks.

pub mod audit;
pub mod clock;

pub use audit::{InMemoryAuditLog, TracingAuditSink};
pub use clock::{ManualClock, SystemClock};
