//! GBCE Clock Infrastructure
//!
//! Provides time sources for the analytics:
//!
//! - [`SystemClock`]: wall-clock time, used by the demonstration binary
//! - [`ManualClock`]: frozen time that only moves when told to, used for
//!   deterministic tests of the trailing-window calculations
//!
//! ## Usage
//!
//! ```
//! use gbce_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let t0 = clock.now();
//! clock.advance(Duration::minutes(15));
//! assert_eq!(clock.now() - t0, Duration::minutes(15));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use gbce_ports::Clock;
