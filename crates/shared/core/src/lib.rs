//! GBCE Core Domain
//!
//! Pure domain types for the Global Beverage Corporation Exchange analytics.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Reference data
    Stock,
    StockSymbol,
    StockType,
    UnknownSymbol,
    // Trading entities
    Side,
    Trade,
    TradeId,
};
pub use values::{Price, Quantity, Rate, Timestamp};
