use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
/// Future: could become a newtype with validation (positive)
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;

/// Fractional rate (dividend yield, fixed dividend). 0.02 means 2%
pub type Rate = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
