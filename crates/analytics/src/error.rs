//! Analytics errors

use gbce_core::{Price, StockSymbol};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown stock: {0}")]
    UnknownStock(StockSymbol),

    #[error("Invalid price for {symbol}: {price} (must be positive)")]
    InvalidPrice { symbol: StockSymbol, price: Price },

    #[error("Dividend yield of {symbol} is zero, P/E ratio is undefined")]
    ZeroDividendYield { symbol: StockSymbol },

    #[error("Invalid VWAP window: {secs}s (must be positive and representable)")]
    InvalidWindow { secs: i64 },

    #[error("No stock has trades in the window, index is undefined")]
    NoData,

    #[error("Arithmetic overflow: {0}")]
    Arithmetic(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
