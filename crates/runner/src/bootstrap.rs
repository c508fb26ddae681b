//! Bootstrap - Runner configuration and market setup
//!
//! Handles initial setup of the demonstration:
//! - Loading the runner config (JSON file, every field optional)
//! - The sample trade set replayed by the scenarios
//! - Building a stock market on a given clock

use gbce_analytics::{AnalyticsConfig, StockMarket};
use gbce_clock::Clock;
use gbce_core::{Price, Quantity, Side, StockSymbol};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::error::ConfigError;

/// A trade to replay into the market, stamped at replay time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTrade {
    pub symbol: StockSymbol,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl SampleTrade {
    pub fn buy(symbol: StockSymbol, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            side: Side::Buy,
            price,
            quantity,
        }
    }
}

/// The sample trade set used by the demonstration
pub fn default_sample_trades() -> Vec<SampleTrade> {
    vec![
        SampleTrade::buy(StockSymbol::Tea, dec!(10), dec!(100)),
        SampleTrade::buy(StockSymbol::Gin, dec!(15), dec!(150)),
        SampleTrade::buy(StockSymbol::Tea, dec!(13), dec!(130)),
        SampleTrade::buy(StockSymbol::Tea, dec!(12), dec!(200)),
        SampleTrade::buy(StockSymbol::Ale, dec!(11), dec!(110)),
        SampleTrade::buy(StockSymbol::Gin, dec!(12), dec!(170)),
        SampleTrade::buy(StockSymbol::Joe, dec!(13), dec!(140)),
        SampleTrade::buy(StockSymbol::Pop, dec!(12), dec!(210)),
        SampleTrade::buy(StockSymbol::Ale, dec!(14), dec!(180)),
        SampleTrade::buy(StockSymbol::Gin, dec!(16), dec!(160)),
        SampleTrade::buy(StockSymbol::Joe, dec!(13), dec!(150)),
        SampleTrade::buy(StockSymbol::Pop, dec!(15), dec!(230)),
    ]
}

/// Root configuration for the runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Analytics tunables
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Trades replayed before the VWAP and index scenarios
    #[serde(default = "default_sample_trades")]
    pub sample_trades: Vec<SampleTrade>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            analytics: AnalyticsConfig::default(),
            sample_trades: default_sample_trades(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the analytics cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytics.validate().map_err(ConfigError::Invalid)
    }

    /// Build a market with the GBCE listing on `clock`
    pub fn build_market(&self, clock: Arc<dyn Clock>) -> StockMarket {
        StockMarket::with_config(clock, self.analytics.clone())
    }
}

/// Replay sample trades into `market`, stamped with the market clock
pub fn add_sample_trades(market: &mut StockMarket, trades: &[SampleTrade]) {
    for trade in trades {
        market.record_trade(trade.symbol, trade.side, trade.price, trade.quantity);
    }
    log::info!("Added {} sample trades", trades.len());
}
