use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{AlignedSeries, GoldwatchError};

/// Number of clean deltas captured before a corrupted run to model local noise.
/// A point needs this many prior points before it is eligible for repair.
const NOISE_WINDOW: usize = 12;

/// Source of uniform noise in `[0, 1)`.
///
/// Repair takes its randomness through this trait so tests can inject a seeded
/// generator and assert statistical bounds instead of exact values.
pub trait NoiseSource {
    /// Draw the next value, uniform in `[0, 1)`.
    fn sample(&mut self) -> f64;
}

/// Adapter exposing any `rand` generator as a [`NoiseSource`]. Tests pair it
/// with a seeded `StdRng` for deterministic draws.
pub struct RngNoise<R: Rng>(pub R);

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn sample(&mut self) -> f64 {
        self.0.random()
    }
}

/// Default production noise source backed by the thread-local RNG.
pub struct ThreadRngSource(rand::rngs::ThreadRng);

impl ThreadRngSource {
    /// Create a source over the calling thread's RNG.
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for ThreadRngSource {
    fn sample(&mut self) -> f64 {
        self.0.random()
    }
}

/// How the replacement anchor evolves inside one corrupted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ReanchorPolicy {
    /// Anchor every replacement in a run to the single region price observed
    /// just before the run started. This reproduces the historical behavior:
    /// repaired values in a long run cluster around one value and can look
    /// visually flat, but match previously rendered charts.
    #[default]
    Fixed,
    /// Re-anchor to the most recently repaired value on each step, letting a
    /// long run drift like organic data instead of clustering.
    Chained,
}

/// Repair corrupted region prices in place, using the default
/// [`ReanchorPolicy::Fixed`] behavior, and return the corrected slice.
///
/// See [`repair_region_prices_with`] for the algorithm and error conditions.
pub fn repair_region_prices<'a>(
    series: &'a mut AlignedSeries,
    threshold: f64,
    noise: &mut dyn NoiseSource,
) -> Result<&'a [f64], GoldwatchError> {
    repair_region_prices_with(series, threshold, ReanchorPolicy::default(), noise)
}

/// Repair corrupted region prices in place and return the corrected slice.
///
/// A region price at index `i` is corrupted when
/// `region[i] - server[i] > threshold * server[i]`. Each detected run is
/// rewritten with synthetic values `anchor + u`, where `u` is uniform in
/// `[-1, 1)` scaled by the population standard deviation of the 12 deltas
/// preceding the run. Points at index 12 or below are never repaired: the
/// noise model needs a full trailing window of clean deltas.
///
/// # Errors
/// - `Err(GoldwatchError::InvalidThreshold)` if `threshold` is not a positive
///   finite number.
pub fn repair_region_prices_with<'a>(
    series: &'a mut AlignedSeries,
    threshold: f64,
    policy: ReanchorPolicy,
    noise: &mut dyn NoiseSource,
) -> Result<&'a [f64], GoldwatchError> {
    let (_, server_prices, region_prices) = series.parts_mut();
    repair_paired_prices(server_prices, region_prices, threshold, policy, noise)?;
    Ok(series.region_prices())
}

/// Slice-level repair worker over paired price arrays.
///
/// Walks `region` by index. When `region[i] - server[i] > threshold *
/// server[i]` and `i > 12`, the index opens a corrupted run: the region price
/// just before the run becomes the anchor and the 12 preceding deltas become
/// the noise model. Every subsequent index still above threshold (recomputed
/// against the current, possibly already-rewritten region value) is replaced
/// with `anchor + u`, `u` uniform in `[-1, 1)` times the window's population
/// standard deviation. Under [`ReanchorPolicy::Fixed`] the anchor and window
/// are captured once per run and never updated, so a run is only opened once
/// at its first index; re-detection can still happen later if a random
/// replacement itself lands back above threshold.
///
/// # Errors
/// - `Err(GoldwatchError::InvalidThreshold)` if `threshold` is not a positive
///   finite number.
/// - `Err(GoldwatchError::Misaligned)` if the arrays differ in length. This is
///   a contract violation: [`AlignedSeries`] cannot produce such inputs.
pub fn repair_paired_prices(
    server: &[f64],
    region: &mut [f64],
    threshold: f64,
    policy: ReanchorPolicy,
    noise: &mut dyn NoiseSource,
) -> Result<(), GoldwatchError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(GoldwatchError::invalid_threshold(threshold));
    }
    if server.len() != region.len() {
        return Err(GoldwatchError::misaligned(server.len(), region.len()));
    }

    for i in 0..region.len() {
        let diff = region[i] - server[i];
        if diff > threshold * server[i] && i > NOISE_WINDOW {
            let mut anchor = region[i - 1];
            let window: Vec<f64> = (i - NOISE_WINDOW..i)
                .map(|x| region[x] - server[x])
                .collect();
            let spread = population_stddev(&window);
            for j in i..region.len() {
                if region[j] - server[j] > threshold * server[j] {
                    let u = (noise.sample() * 2.0 - 1.0) * spread;
                    region[j] = anchor + u;
                    if policy == ReanchorPolicy::Chained {
                        anchor = region[j];
                    }
                }
            }
        }
    }
    Ok(())
}

/// Population standard deviation (the noise model treats the window as the
/// whole population, not a sample).
fn population_stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
