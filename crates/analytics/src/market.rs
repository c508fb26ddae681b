//! Stock Market
//!
//! Owns the registry, the trade log and the clock, and exposes the
//! analytics over them. Each market is an isolated instance; mutation
//! goes through `&mut self`, so a host that shares one across threads
//! has to wrap it in its own lock.

use gbce_clock::SystemClock;
use gbce_core::{Price, Quantity, Rate, Side, StockSymbol, Timestamp, Trade};
use gbce_ports::Clock;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::registry::StockRegistry;
use crate::trade_log::TradeLog;
use crate::{dividend, index, vwap};

pub struct StockMarket {
    registry: StockRegistry,
    trades: TradeLog,
    clock: Arc<dyn Clock>,
    config: AnalyticsConfig,
}

impl StockMarket {
    /// Create a market with the GBCE listing and default config
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_config(clock, AnalyticsConfig::default())
    }

    /// Create a market with the GBCE listing and custom config
    pub fn with_config(clock: Arc<dyn Clock>, config: AnalyticsConfig) -> Self {
        log::info!(
            "Stock market created (clock={}, vwap window={}s)",
            clock.name(),
            config.vwap_window_secs
        );
        if let Err(e) = config.validate() {
            log::warn!("{}, volume weighted prices will fail", e);
        }
        Self {
            registry: StockRegistry::with_reference_data(),
            trades: TradeLog::new(),
            clock,
            config,
        }
    }

    /// Create a market that stamps trades with wall-clock time
    pub fn with_system_clock(config: AnalyticsConfig) -> Self {
        Self::with_config(Arc::new(SystemClock::new()), config)
    }

    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StockRegistry {
        &mut self.registry
    }

    pub fn trade_log(&self) -> &TradeLog {
        &self.trades
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Current time according to the market clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    // ========== Trades ==========

    /// Record a trade stamped with the clock's current time
    pub fn record_trade(
        &mut self,
        symbol: StockSymbol,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> &Trade {
        let now = self.clock.now();
        self.trades.record_trade(symbol, side, price, quantity, now)
    }

    /// Record a trade with an explicit timestamp
    pub fn record_trade_at(
        &mut self,
        symbol: StockSymbol,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> &Trade {
        self.trades
            .record_trade(symbol, side, price, quantity, timestamp)
    }

    pub fn clear_trades(&mut self) {
        self.trades.clear();
    }

    /// All recorded trades in insertion order
    pub fn trades(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.trades()
    }

    // ========== Analytics ==========

    /// Dividend yield of `symbol` at `price`
    pub fn dividend_yield(&self, symbol: StockSymbol, price: Price) -> Result<Rate> {
        dividend::dividend_yield(self.registry.lookup(symbol)?, price)
    }

    /// P/E ratio of `symbol` at `price`
    pub fn pe_ratio(&self, symbol: StockSymbol, price: Price) -> Result<Decimal> {
        dividend::pe_ratio(self.registry.lookup(symbol)?, price)
    }

    /// Volume weighted price of `symbol` over the window ending at `now`
    ///
    /// `Ok(None)` when the stock has no trades in the window.
    pub fn volume_weighted_price(
        &self,
        symbol: StockSymbol,
        now: Timestamp,
    ) -> Result<Option<Price>> {
        vwap::volume_weighted_price(&self.trades, symbol, now, self.config.vwap_window()?)
    }

    /// Volume weighted price of `symbol` over the window ending now
    pub fn volume_weighted_price_now(&self, symbol: StockSymbol) -> Result<Option<Price>> {
        self.volume_weighted_price(symbol, self.clock.now())
    }

    /// All Share Index over the window ending at `now`
    pub fn market_index(&self, now: Timestamp) -> Result<Price> {
        let mut prices = Vec::with_capacity(StockSymbol::ALL.len());
        for symbol in StockSymbol::ALL {
            match self.volume_weighted_price(symbol, now)? {
                Some(price) => prices.push((symbol, price)),
                None => {
                    log::debug!("{} has no trades in the window, left out of the index", symbol)
                }
            }
        }

        index::geometric_mean(prices).inspect_err(|e| log::warn!("All Share Index: {}", e))
    }

    /// All Share Index over the window ending now
    pub fn market_index_now(&self) -> Result<Price> {
        self.market_index(self.clock.now())
    }
}
