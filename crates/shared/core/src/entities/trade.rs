use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Side, StockSymbol};

/// Unique identifier for a trade
pub type TradeId = Uuid;

/// A manually recorded trade in a listed stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub timestamp: DateTime<Utc>,
    pub symbol: StockSymbol,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Trade {
    /// Create a new trade with explicit timestamp
    pub fn new_with_time(
        symbol: StockSymbol,
        side: Side,
        price: Decimal,
        quantity: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            symbol,
            side,
            quantity,
            price,
        }
    }

    /// Returns the notional value of the trade (price * quantity)
    ///
    /// `None` when the product overflows; trades are stored unvalidated.
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.quantity)
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE {} {} quantity {} at price {} at time {}",
            self.symbol,
            self.side,
            self.quantity,
            self.price,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}
