//! GBCE Ports
//!
//! Port definitions (traits) for the GBCE stock analytics.
//! These define the boundaries between domain logic and infrastructure.

mod clock;

pub use clock::Clock;
