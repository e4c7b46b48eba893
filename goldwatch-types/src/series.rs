//! Price/quantity observations and the series built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GoldwatchError, Source};

/// One (timestamp, price, quantity) observation from a single source.
///
/// Prices are in copper, as returned by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Scan timestamp.
    pub ts: DateTime<Utc>,
    /// Market value in copper.
    pub price: f64,
    /// Quantity listed at scan time.
    pub quantity: u64,
}

/// Ordered sequence of [`Sample`]s from a single source.
///
/// Construction normalizes the input: samples are sorted by timestamp and
/// duplicate timestamps are dropped (first wins), so timestamps are strictly
/// increasing afterwards. The series is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    source: Source,
    samples: Vec<Sample>,
}

impl TimeSeries {
    /// Build a series from raw samples, normalizing order and duplicates.
    #[must_use]
    pub fn new(source: Source, mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.ts);
        samples.dedup_by_key(|s| s.ts);
        Self { source, samples }
    }

    /// The market this series was sampled from.
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// The normalized samples, ordered by strictly increasing timestamp.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamps of all samples, in order.
    #[must_use]
    pub fn times(&self) -> Vec<DateTime<Utc>> {
        self.samples.iter().map(|s| s.ts).collect()
    }

    /// Prices of all samples, in order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }
}

/// Two price series mapped onto a shared time axis.
///
/// All three sequences have equal length and `times[i]` corresponds
/// positionally to `server_prices[i]` and `region_prices[i]`. Only the region
/// prices may be rewritten after construction (by outlier repair); times and
/// server prices are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    times: Vec<DateTime<Utc>>,
    server_prices: Vec<f64>,
    region_prices: Vec<f64>,
}

impl AlignedSeries {
    /// Build an aligned series, enforcing the equal-length invariant.
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::Misaligned)` if the two price arrays differ
    /// in length, and `Err(GoldwatchError::Data)` if the time axis does not
    /// match them.
    pub fn new(
        times: Vec<DateTime<Utc>>,
        server_prices: Vec<f64>,
        region_prices: Vec<f64>,
    ) -> Result<Self, GoldwatchError> {
        if server_prices.len() != region_prices.len() {
            return Err(GoldwatchError::misaligned(
                server_prices.len(),
                region_prices.len(),
            ));
        }
        if times.len() != server_prices.len() {
            return Err(GoldwatchError::Data(format!(
                "time axis has {} points for {} prices",
                times.len(),
                server_prices.len()
            )));
        }
        Ok(Self {
            times,
            server_prices,
            region_prices,
        })
    }

    /// An aligned series with no points (non-overlapping inputs).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            times: Vec::new(),
            server_prices: Vec::new(),
            region_prices: Vec::new(),
        }
    }

    /// Number of aligned points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the aligned series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The shared time axis, strictly increasing.
    #[must_use]
    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    /// Server prices on the shared axis.
    #[must_use]
    pub fn server_prices(&self) -> &[f64] {
        &self.server_prices
    }

    /// Region prices on the shared axis.
    #[must_use]
    pub fn region_prices(&self) -> &[f64] {
        &self.region_prices
    }

    /// Split borrow for in-place region repair: times and server prices stay
    /// read-only while region prices are rewritten.
    #[must_use]
    pub fn parts_mut(&mut self) -> (&[DateTime<Utc>], &[f64], &mut [f64]) {
        (&self.times, &self.server_prices, &mut self.region_prices)
    }
}
