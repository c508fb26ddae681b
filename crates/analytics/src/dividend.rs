//! Dividend Yield and P/E Ratio
//!
//! | Stock type | Dividend yield |
//! |------------|----------------|
//! | Common     | last dividend / price |
//! | Preferred  | fixed dividend × par value / price |
//!
//! P/E ratio = price / dividend yield.
//!
//! A non-positive price is rejected, and so is a P/E ratio over a zero
//! yield, instead of producing an infinite value.

use gbce_core::{Price, Rate, Stock};
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};

/// Dividend yield of `stock` at `price`
pub fn dividend_yield(stock: &Stock, price: Price) -> Result<Rate> {
    if price <= Decimal::ZERO {
        return Err(AnalyticsError::InvalidPrice {
            symbol: stock.symbol,
            price,
        });
    }

    stock
        .dividend()
        .and_then(|dividend| dividend.checked_div(price))
        .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} dividend / {}", stock.symbol, price)))
}

/// Price/earnings ratio of `stock` at `price`
pub fn pe_ratio(stock: &Stock, price: Price) -> Result<Decimal> {
    let dividend_yield = dividend_yield(stock, price)?;
    if dividend_yield.is_zero() {
        return Err(AnalyticsError::ZeroDividendYield {
            symbol: stock.symbol,
        });
    }

    price
        .checked_div(dividend_yield)
        .ok_or_else(|| AnalyticsError::Arithmetic(format!("{} price / yield", stock.symbol)))
}
