//! Volume Weighted Stock Price
//!
//! VWAP = Σ(price × quantity) / Σ(quantity), over the trades of one stock
//! whose timestamp falls strictly after `now - window`.

use chrono::Duration;
use gbce_core::{Price, StockSymbol, Timestamp, Trade};
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};

/// Volume weighted price of `symbol` over the trailing `window` ending at `now`
///
/// Returns `Ok(None)` when no trade qualifies, which is distinct from a zero
/// price. Sums that overflow are reported as `Arithmetic`.
pub fn volume_weighted_price<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    symbol: StockSymbol,
    now: Timestamp,
    window: Duration,
) -> Result<Option<Price>> {
    if window <= Duration::zero() {
        return Err(AnalyticsError::InvalidWindow {
            secs: window.num_seconds(),
        });
    }
    let window_start = now
        .checked_sub_signed(window)
        .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} - {}", now, window)))?;

    let mut value_sum = Decimal::ZERO;
    let mut volume_sum = Decimal::ZERO;

    for trade in trades
        .into_iter()
        .filter(|t| t.symbol == symbol && t.timestamp > window_start)
    {
        value_sum = trade
            .notional()
            .and_then(|notional| value_sum.checked_add(notional))
            .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} traded value", symbol)))?;
        volume_sum = volume_sum
            .checked_add(trade.quantity)
            .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} traded volume", symbol)))?;
    }

    log::trace!(
        "{} window ({}, {}]: value={} volume={}",
        symbol,
        window_start,
        now,
        value_sum,
        volume_sum
    );

    if volume_sum.is_zero() {
        return Ok(None);
    }
    value_sum
        .checked_div(volume_sum)
        .map(Some)
        .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} value / volume", symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gbce_core::Side;
    use rust_decimal_macros::dec;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap()
    }

    fn trade(symbol: StockSymbol, price: Decimal, qty: Decimal, age: Duration) -> Trade {
        Trade::new_with_time(symbol, Side::Buy, price, qty, now() - age)
    }

    #[test]
    fn test_weighted_average() {
        let trades = vec![
            trade(StockSymbol::Tea, dec!(10), dec!(100), Duration::minutes(1)),
            trade(StockSymbol::Tea, dec!(13), dec!(130), Duration::minutes(2)),
        ];

        let vwap = volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::minutes(15))
            .unwrap()
            .unwrap();
        // (1000 + 1690) / 230 = 11.6521...
        assert!((vwap - dec!(11.652173913)).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_other_symbols_ignored() {
        let trades = vec![
            trade(StockSymbol::Tea, dec!(10), dec!(100), Duration::zero()),
            trade(StockSymbol::Gin, dec!(99), dec!(1000), Duration::zero()),
        ];

        let vwap = volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::minutes(15));
        assert_eq!(vwap, Ok(Some(dec!(10))));
    }

    #[test]
    fn test_window_lower_bound_is_exclusive() {
        let window = Duration::minutes(15);
        let trades = vec![
            // Exactly on the boundary: excluded
            trade(StockSymbol::Pop, dec!(50), dec!(10), window),
            // Just inside: included
            trade(
                StockSymbol::Pop,
                dec!(12),
                dec!(10),
                window - Duration::milliseconds(1),
            ),
            // Well outside: excluded
            trade(StockSymbol::Pop, dec!(70), dec!(10), Duration::hours(1)),
        ];

        let vwap = volume_weighted_price(&trades, StockSymbol::Pop, now(), window);
        assert_eq!(vwap, Ok(Some(dec!(12))));
    }

    #[test]
    fn test_no_qualifying_trades_is_none() {
        let trades = vec![trade(
            StockSymbol::Ale,
            dec!(11),
            dec!(110),
            Duration::minutes(20),
        )];

        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Ale, now(), Duration::minutes(15)),
            Ok(None)
        );
        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Joe, now(), Duration::minutes(15)),
            Ok(None)
        );
        let empty: Vec<Trade> = Vec::new();
        assert_eq!(
            volume_weighted_price(&empty, StockSymbol::Tea, now(), Duration::minutes(15)),
            Ok(None)
        );
    }

    #[test]
    fn test_zero_price_is_a_value() {
        let trades = vec![trade(StockSymbol::Tea, dec!(0), dec!(100), Duration::zero())];

        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::minutes(15)),
            Ok(Some(dec!(0)))
        );
    }

    #[test]
    fn test_future_trades_are_included() {
        // Only the lower bound is checked
        let trades = vec![Trade::new_with_time(
            StockSymbol::Joe,
            Side::Sell,
            dec!(13),
            dec!(150),
            now() + Duration::minutes(1),
        )];

        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Joe, now(), Duration::minutes(15)),
            Ok(Some(dec!(13)))
        );
    }

    #[test]
    fn test_overflowing_value_is_an_error() {
        let trades = vec![trade(StockSymbol::Tea, Decimal::MAX, dec!(2), Duration::zero())];

        assert!(matches!(
            volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::minutes(15)),
            Err(AnalyticsError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_overflowing_sum_is_an_error() {
        let trades = vec![
            trade(StockSymbol::Gin, Decimal::MAX, dec!(1), Duration::zero()),
            trade(StockSymbol::Gin, Decimal::MAX, dec!(1), Duration::zero()),
        ];

        assert!(matches!(
            volume_weighted_price(&trades, StockSymbol::Gin, now(), Duration::minutes(15)),
            Err(AnalyticsError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let trades = vec![trade(StockSymbol::Tea, dec!(10), dec!(100), Duration::zero())];

        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::seconds(-60)),
            Err(AnalyticsError::InvalidWindow { secs: -60 })
        );
        assert_eq!(
            volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::zero()),
            Err(AnalyticsError::InvalidWindow { secs: 0 })
        );
    }

    #[test]
    fn test_window_reaching_before_representable_time() {
        let trades = vec![trade(StockSymbol::Tea, dec!(10), dec!(100), Duration::zero())];

        assert!(matches!(
            volume_weighted_price(&trades, StockSymbol::Tea, now(), Duration::MAX),
            Err(AnalyticsError::Arithmetic(_))
        ));
    }
}
