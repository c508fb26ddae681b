//! Analytics configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Default trailing window for the volume weighted stock price
pub const DEFAULT_VWAP_WINDOW_SECS: i64 = 15 * 60;

/// Tunables for the analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Width of the trailing window used by the volume weighted price, in seconds
    #[serde(default = "default_vwap_window_secs")]
    pub vwap_window_secs: i64,
}

fn default_vwap_window_secs() -> i64 {
    DEFAULT_VWAP_WINDOW_SECS
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            vwap_window_secs: default_vwap_window_secs(),
        }
    }
}

impl AnalyticsConfig {
    /// Trailing window as a duration
    ///
    /// Rejects a window that is not positive or does not fit a `Duration`.
    pub fn vwap_window(&self) -> Result<Duration> {
        let secs = self.vwap_window_secs;
        if secs <= 0 {
            return Err(AnalyticsError::InvalidWindow { secs });
        }
        Duration::try_seconds(secs).ok_or(AnalyticsError::InvalidWindow { secs })
    }

    /// Check the config can be used by a market
    pub fn validate(&self) -> Result<()> {
        self.vwap_window().map(|_| ())
    }
}
