//! GBCE Analytics
//!
//! Analytics over the Global Beverage Corporation Exchange:
//! - **Stock Registry**: fixed reference data for the five listed stocks
//! - **Trade Log**: append-only record of manually entered trades
//! - **Dividend Yield / P/E Ratio**: formulas over reference data and a price
//! - **Volume Weighted Stock Price**: trades in a trailing window (15 minutes by default)
//! - **All Share Index**: geometric mean of the volume weighted prices
//!
//! ## Architecture
//!
//! ```text
//!        record_trade ──►┌──────────────────────────────────────┐
//!                        │             StockMarket              │
//!                        │  ┌───────────────┐ ┌──────────────┐  │
//!                        │  │ StockRegistry │ │   TradeLog   │  │
//!                        │  └───────┬───────┘ └──────┬───────┘  │
//!                        │          │                │          │
//!                        │   dividend yield      VWAP (window)  │
//!                        │   P/E ratio              │           │
//!                        │                     All Share Index  │
//!                        └──────────────────────────────────────┘
//!                                         ▲
//!                                         │ now
//!                                       Clock
//! ```

pub mod config;
pub mod dividend;
pub mod error;
pub mod index;
pub mod market;
pub mod registry;
pub mod trade_log;
pub mod vwap;

pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, Result};
pub use market::StockMarket;
pub use registry::StockRegistry;
pub use trade_log::TradeLog;
