//! Trade Log
//!
//! Append-only record of trades, in insertion order. Trades are never
//! mutated; the only removal is a bulk clear.

use gbce_core::{Price, Quantity, Side, StockSymbol, Timestamp, Trade};

#[derive(Debug, Clone, Default)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trade
    pub fn record(&mut self, trade: Trade) -> &Trade {
        log::debug!("Recorded {}", trade);
        self.trades.push(trade);
        &self.trades[self.trades.len() - 1]
    }

    /// Build a trade stamped with `timestamp` and append it
    ///
    /// Price and quantity are not validated: zero or negative values are
    /// stored as given and will skew the volume weighted price.
    pub fn record_trade(
        &mut self,
        symbol: StockSymbol,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> &Trade {
        self.record(Trade::new_with_time(symbol, side, price, quantity, timestamp))
    }

    /// Remove every trade
    pub fn clear(&mut self) {
        log::debug!("Cleared {} trades", self.trades.len());
        self.trades.clear();
    }

    /// All trades in insertion order
    ///
    /// The iterator is lazy and cloneable, and calling this again restarts
    /// from the first trade.
    pub fn trades(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }

    /// Trades for one symbol in insertion order
    pub fn for_symbol(&self, symbol: StockSymbol) -> impl Iterator<Item = &Trade> + Clone + '_ {
        self.trades.iter().filter(move |t| t.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl<'a> IntoIterator for &'a TradeLog {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_preserves_order() {
        let mut log = TradeLog::new();
        let now = Utc::now();
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(10), dec!(100), now);
        log.record_trade(StockSymbol::Gin, Side::Sell, dec!(15), dec!(150), now);
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(13), dec!(130), now);

        let prices: Vec<_> = log.trades().map(|t| t.price).collect();
        assert_eq!(prices, vec![dec!(10), dec!(15), dec!(13)]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_no_dedup() {
        let mut log = TradeLog::new();
        let now = Utc::now();
        log.record_trade(StockSymbol::Pop, Side::Buy, dec!(12), dec!(210), now);
        log.record_trade(StockSymbol::Pop, Side::Buy, dec!(12), dec!(210), now);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_record_returns_stored_trade() {
        let mut log = TradeLog::new();
        let ts = Utc::now() - Duration::minutes(3);
        let trade = log
            .record_trade(StockSymbol::Joe, Side::Sell, dec!(13), dec!(140), ts)
            .clone();

        assert_eq!(trade.timestamp, ts);
        assert_eq!(log.trades().next(), Some(&trade));
    }

    #[test]
    fn test_accepts_non_positive_values() {
        let mut log = TradeLog::new();
        log.record_trade(StockSymbol::Ale, Side::Buy, dec!(0), dec!(-5), Utc::now());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut log = TradeLog::new();
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(10), dec!(100), Utc::now());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.trades().count(), 0);
    }

    #[test]
    fn test_trades_is_restartable() {
        let mut log = TradeLog::new();
        let now = Utc::now();
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(10), dec!(100), now);
        log.record_trade(StockSymbol::Ale, Side::Buy, dec!(11), dec!(110), now);

        let iter = log.trades();
        let first_pass: Vec<_> = iter.clone().collect();
        let second_pass: Vec<_> = iter.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(log.trades().count(), 2);
        assert_eq!((&log).into_iter().count(), 2);
    }

    #[test]
    fn test_for_symbol() {
        let mut log = TradeLog::new();
        let now = Utc::now();
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(10), dec!(100), now);
        log.record_trade(StockSymbol::Gin, Side::Buy, dec!(15), dec!(150), now);
        log.record_trade(StockSymbol::Tea, Side::Buy, dec!(13), dec!(130), now);

        assert_eq!(log.for_symbol(StockSymbol::Tea).count(), 2);
        assert_eq!(log.for_symbol(StockSymbol::Joe).count(), 0);
    }
}
