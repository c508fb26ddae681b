//! Stock Registry
//!
//! Reference data for the stocks listed on the GBCE. Populated once at
//! startup and read by the dividend calculators.

use gbce_core::{Stock, StockSymbol};
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::error::{AnalyticsError, Result};

/// The fixed GBCE listing
pub fn reference_data() -> Vec<Stock> {
    vec![
        Stock::common(StockSymbol::Tea, dec!(0), dec!(100)),
        Stock::common(StockSymbol::Pop, dec!(8), dec!(100)),
        Stock::common(StockSymbol::Ale, dec!(23), dec!(60)),
        Stock::preferred(StockSymbol::Gin, dec!(8), dec!(0.02), dec!(100)),
        Stock::common(StockSymbol::Joe, dec!(13), dec!(250)),
    ]
}

/// Lookup of stock reference data by symbol
#[derive(Debug, Clone, Default)]
pub struct StockRegistry {
    stocks: HashMap<StockSymbol, Stock>,
}

impl StockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the GBCE listing
    pub fn with_reference_data() -> Self {
        let mut registry = Self::new();
        registry.init_reference_data();
        registry
    }

    /// Load the GBCE listing, replacing any entries for the same symbols
    pub fn init_reference_data(&mut self) {
        for stock in reference_data() {
            self.insert(stock);
        }
        log::debug!("Loaded reference data for {} stocks", self.stocks.len());
    }

    /// Register a stock, returning the entry it replaced
    pub fn insert(&mut self, stock: Stock) -> Option<Stock> {
        self.stocks.insert(stock.symbol, stock)
    }

    /// Get the reference data for a symbol
    pub fn lookup(&self, symbol: StockSymbol) -> Result<&Stock> {
        self.stocks
            .get(&symbol)
            .ok_or(AnalyticsError::UnknownStock(symbol))
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Registered stocks in listing order
    pub fn iter(&self) -> impl Iterator<Item = &Stock> + '_ {
        StockSymbol::ALL
            .into_iter()
            .filter_map(move |symbol| self.stocks.get(&symbol))
    }
}
