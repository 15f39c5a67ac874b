//! Clock implementations - wall clock for real runs, manual clock for tests and demos.

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;
