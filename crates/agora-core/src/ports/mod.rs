//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod audit;
mod clock;

pub use audit::AuditSink;
pub use clock::Clock;
