use serde::{Deserialize, Serialize};

/// Stock class, selects the dividend formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockType {
    /// Pays a variable dividend: yield is last dividend over price
    Common,
    /// Pays a fixed rate on par value
    Preferred,
}
