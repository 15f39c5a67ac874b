use chrono::{DateTime, Utc};

/// Time source for creation timestamps, like timestamps and post age.
pub trait Clock: Send + Sync {
    /// Current wall-clock time. Successive calls must not go backwards.
    fn now(&self) -> DateTime<Utc>;
}
