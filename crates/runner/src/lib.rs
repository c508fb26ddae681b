//! GBCE Runner - Analytics Demonstration
//!
//! Drives the GBCE analytics through four scenarios:
//!
//! - **Bootstrap**: runner config, sample trades and market setup
//! - **Scenarios**: dividend yield, P/E ratio, volume weighted price and
//!   the All Share Index, each producing a printable report
//!
//! ## Flow
//!
//! ```text
//!   RunnerConfig (JSON, optional)
//!          │
//!          ▼
//!   ┌──────────────┐   sample trades   ┌──────────────┐
//!   │  Bootstrap   │ ────────────────► │ StockMarket  │
//!   └──────────────┘                   └──────┬───────┘
//!                                             │
//!                                             ▼
//!                                   ┌───────────────────┐
//!                                   │  ScenarioRunner   │ ──► DemoReport ──► stdout
//!                                   └───────────────────┘
//! ```

pub mod bootstrap;
pub mod error;
pub mod scenarios;

// Re-export main types
pub use bootstrap::{RunnerConfig, SampleTrade, default_sample_trades};
pub use error::{ConfigError, RunnerError};
pub use scenarios::{DemoReport, IndexReport, Quote, QuoteReport, ScenarioRunner, VwapReport};
