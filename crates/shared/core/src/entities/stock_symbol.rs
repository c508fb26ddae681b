use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ticker of a stock listed on the GBCE
///
/// The listing is closed: every symbol has exactly one entry in the
/// reference data, so lookups never see a symbol they don't know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockSymbol {
    Tea,
    Pop,
    Ale,
    Gin,
    Joe,
}

impl StockSymbol {
    /// Every listed symbol, in listing order
    pub const ALL: [StockSymbol; 5] = [
        StockSymbol::Tea,
        StockSymbol::Pop,
        StockSymbol::Ale,
        StockSymbol::Gin,
        StockSymbol::Joe,
    ];

    /// Ticker as printed on the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            StockSymbol::Tea => "TEA",
            StockSymbol::Pop => "POP",
            StockSymbol::Ale => "ALE",
            StockSymbol::Gin => "GIN",
            StockSymbol::Joe => "JOE",
        }
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a ticker that is not listed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown stock symbol: {0}")]
pub struct UnknownSymbol(pub String);

impl FromStr for StockSymbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockSymbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}
