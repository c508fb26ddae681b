use chrono::Utc;
use gbce_core::Timestamp;
use gbce_ports::Clock;

/// Wall-clock time in UTC
///
/// Used by the `gbce` binary, so sample trades carry the time they were
/// replayed at.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
