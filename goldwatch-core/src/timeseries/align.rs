use chrono::{DateTime, TimeDelta, Utc};

use super::infer::estimate_step_seconds;
use crate::{AlignedSeries, GoldwatchError, Sample, TimeSeries};

/// Matching tolerance when neither series has enough points to estimate a
/// cadence. NexusHub scans are roughly hourly.
const FALLBACK_BUCKET_SECONDS: i64 = 3_600;

/// Nearest-sample matching strategy: select the sample closest to `target` by
/// absolute time distance, or `None` if the closest one is further away than
/// `tolerance`. Ties are broken by preferring the earlier sample.
///
/// `samples` must be ordered by ascending timestamp (as [`TimeSeries`]
/// guarantees). Kept as a named, standalone function so an alternative
/// matching policy (e.g. linear interpolation) can be substituted without
/// touching alignment or repair.
#[must_use]
pub fn nearest_within(
    samples: &[Sample],
    target: DateTime<Utc>,
    tolerance: TimeDelta,
) -> Option<&Sample> {
    let idx = samples.partition_point(|s| s.ts < target);
    let before = idx.checked_sub(1).and_then(|i| samples.get(i));
    let after = samples.get(idx);

    let nearest = match (before, after) {
        (None, None) => return None,
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (Some(b), Some(a)) => {
            // Equidistant -> earlier sample wins, so the comparison is <=.
            if target - b.ts <= a.ts - target { b } else { a }
        }
    };

    let dist = (nearest.ts - target).abs();
    (dist <= tolerance).then_some(nearest)
}

/// Map two independently-sampled series onto a shared time axis.
///
/// The coarser-grained series (larger estimated sampling step) supplies the
/// reference timestamps; the bucket width is that larger step. For each
/// reference time, the nearest sample from each source is selected via
/// [`nearest_within`]; if either source has no sample within one bucket width,
/// the reference point is dropped from all three output sequences.
///
/// The output time axis is strictly increasing, all three sequences have equal
/// length, and the result is fully deterministic. Two series with no
/// overlapping time range produce an empty [`AlignedSeries`]; callers must
/// treat that as a visible failure rather than rendering nothing.
///
/// When a series' cadence cannot be estimated (fewer than two distinct
/// timestamps), it is treated as the coarser one and the bucket width is taken
/// from the other series, falling back to one hour when neither side has a
/// usable cadence.
///
/// # Errors
/// Returns `Err(GoldwatchError::EmptyInput)` if either input series holds no
/// samples.
pub fn align(server: &TimeSeries, region: &TimeSeries) -> Result<AlignedSeries, GoldwatchError> {
    if server.is_empty() {
        return Err(GoldwatchError::empty_input("server series"));
    }
    if region.is_empty() {
        return Err(GoldwatchError::empty_input("region series"));
    }

    let server_step = estimate_step_seconds(server.samples());
    let region_step = estimate_step_seconds(region.samples());

    // Reference = coarser series; an inestimable cadence counts as coarsest.
    let (reference, other, bucket_seconds) = match (server_step, region_step) {
        (Some(s), Some(r)) => {
            if s >= r {
                (server, region, s)
            } else {
                (region, server, r)
            }
        }
        (None, Some(r)) => (server, region, r),
        (Some(s), None) => (region, server, s),
        (None, None) => (server, region, FALLBACK_BUCKET_SECONDS),
    };
    let tolerance = TimeDelta::seconds(bucket_seconds);

    let mut times = Vec::with_capacity(reference.len());
    let mut server_prices = Vec::with_capacity(reference.len());
    let mut region_prices = Vec::with_capacity(reference.len());

    let server_is_reference = core::ptr::eq(reference, server);
    for point in reference.samples() {
        let Some(matched) = nearest_within(other.samples(), point.ts, tolerance) else {
            continue;
        };
        times.push(point.ts);
        if server_is_reference {
            server_prices.push(point.price);
            region_prices.push(matched.price);
        } else {
            server_prices.push(matched.price);
            region_prices.push(point.price);
        }
    }

    AlignedSeries::new(times, server_prices, region_prices)
}
