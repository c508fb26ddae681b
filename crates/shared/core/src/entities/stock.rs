use serde::{Deserialize, Serialize};

use super::{StockSymbol, StockType};
use crate::values::{Price, Rate};

/// Static reference data for a listed stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: StockSymbol,
    pub stock_type: StockType,
    /// Last dividend paid per share
    pub last_dividend: Price,
    /// Fixed dividend rate, only set for preferred stock
    pub fixed_dividend: Option<Rate>,
    pub par_value: Price,
}

impl Stock {
    /// Create a common stock
    pub fn common(symbol: StockSymbol, last_dividend: Price, par_value: Price) -> Self {
        Self {
            symbol,
            stock_type: StockType::Common,
            last_dividend,
            fixed_dividend: None,
            par_value,
        }
    }

    /// Create a preferred stock paying `fixed_dividend` on par
    pub fn preferred(
        symbol: StockSymbol,
        last_dividend: Price,
        fixed_dividend: Rate,
        par_value: Price,
    ) -> Self {
        Self {
            symbol,
            stock_type: StockType::Preferred,
            last_dividend,
            fixed_dividend: Some(fixed_dividend),
            par_value,
        }
    }

    /// Dividend paid per share under this stock's formula
    ///
    /// Common stock pays its last dividend, preferred stock pays the
    /// fixed rate on par. A preferred stock without a rate pays nothing.
    /// `None` only when rate × par overflows.
    pub fn dividend(&self) -> Option<Price> {
        match (self.stock_type, self.fixed_dividend) {
            (StockType::Common, _) => Some(self.last_dividend),
            (StockType::Preferred, Some(rate)) => rate.checked_mul(self.par_value),
            (StockType::Preferred, None) => Some(Price::ZERO),
        }
    }
}
