use chrono::{Duration, Utc};
use gbce_core::Timestamp;
use gbce_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock whose time only moves when explicitly advanced or set
///
/// Shared behind an `Arc` so a test can hold a handle while the market
/// under test reads from the same clock.
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a new manual clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time. If None, uses current wall time.
    pub fn new(initial_time: Option<Timestamp>) -> Arc<Self> {
        Arc::new(Self {
            current_time: RwLock::new(initial_time.unwrap_or_else(Utc::now)),
        })
    }

    /// Advance the clock by a specified duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current_time.write();
        *current += duration;
    }

    /// Explicitly set the clock time
    ///
    /// Warning: this can move time backwards.
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
