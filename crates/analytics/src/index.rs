//! GBCE All Share Index
//!
//! Geometric mean of the volume weighted prices of every stock that traded
//! inside the window. Stocks without trades are left out of both the
//! product and the count.
//!
//! The mean is taken in log space, exp(Σ ln pᵢ / n), so the product of
//! many prices cannot overflow.

use gbce_core::{Price, StockSymbol};
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{AnalyticsError, Result};

/// Geometric mean of per-stock prices
///
/// Fails with [`AnalyticsError::NoData`] when `prices` is empty and with
/// [`AnalyticsError::InvalidPrice`] when a price is zero or negative.
pub fn geometric_mean(prices: impl IntoIterator<Item = (StockSymbol, Price)>) -> Result<Price> {
    let mut log_sum = Decimal::ZERO;
    let mut count: u32 = 0;
    let mut last = Decimal::ZERO;

    for (symbol, price) in prices {
        if price <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidPrice { symbol, price });
        }
        let ln = price
            .checked_ln()
            .ok_or_else(|| AnalyticsError::Arithmetic(format!("ln({price})")))?;
        log_sum = log_sum
            .checked_add(ln)
            .ok_or_else(|| AnalyticsError::Arithmetic("log sum".to_string()))?;
        count += 1;
        last = price;
    }

    match count {
        0 => Err(AnalyticsError::NoData),
        // Skip the log round trip
        1 => Ok(last),
        n => (log_sum / Decimal::from(n))
            .checked_exp()
            .ok_or_else(|| AnalyticsError::Arithmetic("exp(mean log price)".to_string())),
    }
}
