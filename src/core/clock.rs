use chrono::{DateTime, Utc};

/// Source of "now" for ticket timestamps
///
/// The queue never reads the system time directly so tests can drive
/// resolution durations deterministically.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
