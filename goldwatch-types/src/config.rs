//! Configuration types shared by the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Options controlling a server-vs-region comparison request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Whether to repair corrupted region prices after alignment.
    pub repair: bool,
    /// Threshold multiplier `k`: a region price is corrupted when
    /// `region - server > k * server`. `None` falls back to the
    /// orchestrator's configured [`GoldwatchConfig::repair_threshold`].
    pub threshold: Option<f64>,
}

/// Global configuration for the `Goldwatch` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldwatchConfig {
    /// Default number of days of history to request when the caller passes
    /// none. `None` asks the connector for its full available history.
    pub default_timerange_days: Option<u32>,
    /// Default threshold multiplier for outlier repair.
    pub repair_threshold: f64,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
}

impl Default for GoldwatchConfig {
    fn default() -> Self {
        Self {
            default_timerange_days: Some(7),
            repair_threshold: 3.0,
            provider_timeout: Duration::from_secs(10),
        }
    }
}
