//! Scenarios - the four analytics demonstrations
//!
//! Each scenario returns a report; `Display` on the report renders the
//! human-readable text printed by the binary.

use gbce_analytics::{AnalyticsError, StockMarket};
use gbce_clock::Clock;
use gbce_core::{Price, StockSymbol, Trade};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::sync::Arc;

use crate::bootstrap::{RunnerConfig, SampleTrade, add_sample_trades};
use crate::error::RunnerError;

/// Decimal places shown in reports
const DISPLAY_DP: u32 = 6;

/// A metric evaluated for one stock at one price
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: StockSymbol,
    pub price: Price,
    pub value: Result<Decimal, AnalyticsError>,
}

/// Results of a per-stock metric
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteReport {
    pub metric: &'static str,
    pub quotes: Vec<Quote>,
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quote in &self.quotes {
            match &quote.value {
                Ok(value) => writeln!(
                    f,
                    "{} for {} at price {} = {}",
                    self.metric,
                    quote.symbol,
                    quote.price,
                    value.round_dp(DISPLAY_DP).normalize()
                )?,
                Err(e) => writeln!(
                    f,
                    "{} for {} at price {}: {}",
                    self.metric, quote.symbol, quote.price, e
                )?,
            }
        }
        Ok(())
    }
}

/// Volume weighted price of one stock after replaying the sample trades
#[derive(Debug, Clone, PartialEq)]
pub struct VwapReport {
    pub trades: Vec<Trade>,
    pub symbol: StockSymbol,
    pub window_secs: i64,
    pub vwap: Result<Option<Price>, AnalyticsError>,
}

impl fmt::Display for VwapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trade in &self.trades {
            writeln!(f, "{}", trade)?;
        }
        match &self.vwap {
            Ok(Some(vwap)) => writeln!(
                f,
                "Volume weighted stock price of {} = {}",
                self.symbol,
                vwap.round_dp(DISPLAY_DP).normalize()
            ),
            Ok(None) => writeln!(
                f,
                "Volume weighted stock price of {}: no trades in the last {}s",
                self.symbol, self.window_secs
            ),
            Err(e) => writeln!(f, "Volume weighted stock price of {}: {}", self.symbol, e),
        }
    }
}

/// All Share Index after replaying the sample trades
#[derive(Debug, Clone, PartialEq)]
pub struct IndexReport {
    pub trades: Vec<Trade>,
    pub index: Result<Price, AnalyticsError>,
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trade in &self.trades {
            writeln!(f, "{}", trade)?;
        }
        match &self.index {
            Ok(index) => writeln!(
                f,
                "GBCE All Share Index = {}",
                index.round_dp(DISPLAY_DP).normalize()
            ),
            Err(e) => writeln!(f, "GBCE All Share Index: {}", e),
        }
    }
}

/// Everything the demonstration produces
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub dividend_yield: QuoteReport,
    pub pe_ratio: QuoteReport,
    pub vwap: VwapReport,
    pub index: IndexReport,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Dividend yield ==")?;
        write!(f, "{}", self.dividend_yield)?;
        writeln!(f, "== P/E ratio ==")?;
        write!(f, "{}", self.pe_ratio)?;
        writeln!(f, "== Volume weighted stock price ==")?;
        write!(f, "{}", self.vwap)?;
        writeln!(f, "== GBCE All Share Index ==")?;
        write!(f, "{}", self.index)
    }
}

/// Runs the demonstration scenarios against one market
pub struct ScenarioRunner {
    market: StockMarket,
    sample_trades: Vec<SampleTrade>,
}

impl ScenarioRunner {
    pub fn new(market: StockMarket, sample_trades: Vec<SampleTrade>) -> Self {
        Self {
            market,
            sample_trades,
        }
    }

    /// Create a runner from config on the given clock
    ///
    /// Fails when the config was built in code with a window the analytics
    /// cannot use.
    pub fn from_config(
        config: &RunnerConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self::new(config.build_market(clock), config.sample_trades.clone()))
    }

    pub fn market(&self) -> &StockMarket {
        &self.market
    }

    /// Dividend yield of TEA at 10 and GIN at 20
    pub fn dividend_yield(&self) -> QuoteReport {
        let quotes = [(StockSymbol::Tea, dec!(10)), (StockSymbol::Gin, dec!(20))]
            .into_iter()
            .map(|(symbol, price)| Quote {
                symbol,
                price,
                value: self.market.dividend_yield(symbol, price),
            })
            .collect();

        QuoteReport {
            metric: "Dividend yield",
            quotes,
        }
    }

    /// P/E ratio of TEA at 10, GIN at 20 and POP at 25
    pub fn pe_ratio(&self) -> QuoteReport {
        let quotes = [
            (StockSymbol::Tea, dec!(10)),
            (StockSymbol::Gin, dec!(20)),
            (StockSymbol::Pop, dec!(25)),
        ]
        .into_iter()
        .map(|(symbol, price)| {
            let value = self.market.pe_ratio(symbol, price);
            if let Err(e) = &value {
                log::warn!("P/E ratio for {}: {}", symbol, e);
            }
            Quote {
                symbol,
                price,
                value,
            }
        })
        .collect();

        QuoteReport {
            metric: "P/E ratio",
            quotes,
        }
    }

    /// Volume weighted price of TEA over freshly replayed sample trades
    pub fn volume_weighted_price(&mut self) -> VwapReport {
        self.reset_trades();

        let symbol = StockSymbol::Tea;
        let vwap = self.market.volume_weighted_price_now(symbol);
        if let Err(e) = &vwap {
            log::warn!("Volume weighted price for {}: {}", symbol, e);
        }
        VwapReport {
            trades: self.market.trades().cloned().collect(),
            symbol,
            window_secs: self.market.config().vwap_window_secs,
            vwap,
        }
    }

    /// All Share Index over freshly replayed sample trades
    pub fn market_index(&mut self) -> IndexReport {
        self.reset_trades();

        IndexReport {
            trades: self.market.trades().cloned().collect(),
            index: self.market.market_index_now(),
        }
    }

    /// Run the four scenarios in order
    pub fn run(&mut self) -> DemoReport {
        log::info!("Running GBCE scenarios...");
        let report = DemoReport {
            dividend_yield: self.dividend_yield(),
            pe_ratio: self.pe_ratio(),
            vwap: self.volume_weighted_price(),
            index: self.market_index(),
        };
        log::info!("Scenarios complete");
        report
    }

    fn reset_trades(&mut self) {
        self.market.clear_trades();
        add_sample_trades(&mut self.market, &self.sample_trades);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use gbce_clock::ManualClock;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::from_config(&RunnerConfig::default(), ManualClock::new(None)).unwrap()
    }

    #[test]
    fn test_dividend_yield_scenario() {
        let report = runner().dividend_yield();
        assert_eq!(report.quotes.len(), 2);
        assert_eq!(report.quotes[0].value, Ok(dec!(0)));
        assert_eq!(report.quotes[1].value, Ok(dec!(0.1)));
        assert_eq!(
            report.to_string(),
            "Dividend yield for TEA at price 10 = 0\nDividend yield for GIN at price 20 = 0.1\n"
        );
    }

    #[test]
    fn test_pe_ratio_scenario_reports_zero_yield() {
        let report = runner().pe_ratio();
        assert!(matches!(
            report.quotes[0].value,
            Err(AnalyticsError::ZeroDividendYield { .. })
        ));
        assert_eq!(report.quotes[1].value, Ok(dec!(200)));
        assert_eq!(report.quotes[2].value, Ok(dec!(78.125)));

        let text = report.to_string();
        assert!(text.contains("P/E ratio for TEA at price 10: Dividend yield of TEA is zero"));
        assert!(text.contains("P/E ratio for POP at price 25 = 78.125"));
    }

    #[test]
    fn test_scenarios_replay_trades_from_scratch() {
        let mut runner = runner();
        runner.volume_weighted_price();
        runner.volume_weighted_price();
        assert_eq!(runner.market().trades().count(), 12);
    }

    #[test]
    fn test_empty_sample_set() {
        let config = RunnerConfig {
            sample_trades: Vec::new(),
            ..Default::default()
        };
        let mut runner = ScenarioRunner::from_config(&config, ManualClock::new(None)).unwrap();

        let vwap = runner.volume_weighted_price();
        assert_eq!(vwap.vwap, Ok(None));
        assert!(vwap.to_string().contains("no trades in the last 900s"));

        let index = runner.market_index();
        assert_eq!(index.index, Err(AnalyticsError::NoData));
    }

    #[test]
    fn test_from_config_rejects_invalid_window() {
        for secs in [-60, i64::MAX] {
            let mut config = RunnerConfig::default();
            config.analytics.vwap_window_secs = secs;

            let result = ScenarioRunner::from_config(&config, ManualClock::new(None));
            assert!(matches!(
                result,
                Err(RunnerError::Config(ConfigError::Invalid(
                    AnalyticsError::InvalidWindow { .. }
                )))
            ));
        }
    }

    #[test]
    fn test_overflowing_sample_trade_is_reported() {
        let config = RunnerConfig {
            sample_trades: vec![SampleTrade::buy(StockSymbol::Tea, Decimal::MAX, dec!(2))],
            ..Default::default()
        };
        let mut runner = ScenarioRunner::from_config(&config, ManualClock::new(None)).unwrap();

        let vwap = runner.volume_weighted_price();
        assert!(matches!(vwap.vwap, Err(AnalyticsError::Arithmetic(_))));
        assert!(
            vwap.to_string()
                .contains("Volume weighted stock price of TEA: Arithmetic overflow")
        );

        let index = runner.market_index();
        assert!(matches!(index.index, Err(AnalyticsError::Arithmetic(_))));
    }
}
