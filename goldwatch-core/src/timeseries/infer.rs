use chrono::TimeDelta;

use crate::Sample;

/// Estimate a representative sampling step (in seconds) from positive adjacent
/// timestamp deltas in the input series.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median so the result is an actually observed cadence. The
/// input order does not matter; duplicate timestamps are ignored. Returns
/// `None` if fewer than two distinct timestamps are present.
///
/// The aligner uses this to decide which of two series is the coarser one and
/// how wide its matching tolerance should be.
#[must_use]
pub fn estimate_step_seconds(samples: &[Sample]) -> Option<i64> {
    if samples.len() < 2 {
        return None;
    }
    let mut ts: Vec<_> = samples.iter().map(|s| s.ts).collect();
    ts.sort();

    let mut deltas: Vec<i64> = Vec::with_capacity(ts.len().saturating_sub(1));
    let mut last = ts[0];
    for &cur in ts.iter().skip(1) {
        let dt: TimeDelta = cur - last;
        if dt > TimeDelta::zero() {
            deltas.push(dt.num_seconds());
            last = cur;
        }
    }
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    // Mode detection over the sorted deltas; track whether the mode is unique.
    let mut best_delta: i64 = deltas[0];
    let mut best_count: usize = 0;
    let mut num_best_candidates: usize = 0;

    let mut cur_delta: i64 = deltas[0];
    let mut cur_count: usize = 1;
    for &d in deltas.iter().skip(1) {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates = num_best_candidates.saturating_add(1);
        }
        cur_delta = d;
        cur_count = 1;
    }
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates = num_best_candidates.saturating_add(1);
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    // Lower median
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}
