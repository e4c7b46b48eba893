//! Deterministic history fixtures keyed by item slug.
//!
//! Timestamps start at 2023-01-01T00:00:00Z. Server series scan hourly for a
//! week; region series scan every four hours over the same window, except for
//! `ghost-mushroom`, whose region window deliberately does not overlap the
//! server window.

use chrono::{DateTime, Utc};
use goldwatch_core::Sample;

const BASE_TS: i64 = 1_672_531_200; // 2023-01-01T00:00:00Z
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const SERVER_POINTS: i64 = 7 * 24;
const REGION_POINTS: i64 = 7 * 6;

fn at(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).expect("fixture timestamp in range")
}

/// Small deterministic wobble so fixture prices are not flat.
fn wobble(i: i64) -> f64 {
    ((i * 7) % 5) as f64
}

fn series(base_price: f64, start: i64, step: i64, points: i64) -> Vec<Sample> {
    (0..points)
        .map(|i| Sample {
            ts: at(start + i * step),
            price: base_price + wobble(i) * (base_price / 100.0),
            quantity: (100 + (i * 13) % 50) as u64,
        })
        .collect()
}

fn trim(samples: Vec<Sample>, timerange: Option<u32>) -> Vec<Sample> {
    let Some(days) = timerange else {
        return samples;
    };
    let Some(last) = samples.last() else {
        return samples;
    };
    let cutoff = last.ts.timestamp() - i64::from(days) * DAY;
    samples
        .into_iter()
        .filter(|s| s.ts.timestamp() >= cutoff)
        .collect()
}

/// Server-side (per-realm) fixture for a slug, or `None` for unknown items.
pub fn server_samples(slug: &str, timerange: Option<u32>) -> Option<Vec<Sample>> {
    let samples = match slug {
        "saronite-ore" => series(1_250.0, BASE_TS, HOUR, SERVER_POINTS),
        "titanium-ore" => series(92_300.0, BASE_TS, HOUR, SERVER_POINTS),
        "glowcap" => series(480.0, BASE_TS, HOUR, SERVER_POINTS),
        "ghost-mushroom" => series(2_100.0, BASE_TS, HOUR, SERVER_POINTS),
        _ => return None,
    };
    Some(trim(samples, timerange))
}

/// Region-wide fixture for a slug, or `None` for unknown items.
pub fn region_samples(slug: &str, timerange: Option<u32>) -> Option<Vec<Sample>> {
    let samples = match slug {
        "saronite-ore" => series(1_310.0, BASE_TS, 4 * HOUR, REGION_POINTS),
        "titanium-ore" => series(90_800.0, BASE_TS, 4 * HOUR, REGION_POINTS),
        "glowcap" => corrupted_glowcap(),
        // Region scans only exist for a window that ended long before the
        // server window begins.
        "ghost-mushroom" => series(2_050.0, BASE_TS - 30 * DAY, 4 * HOUR, REGION_POINTS),
        _ => return None,
    };
    Some(trim(samples, timerange))
}

/// Region series whose tail carries a corrupted run: from index 20 on, prices
/// jump to several times the server price, the signature of bad upstream data.
fn corrupted_glowcap() -> Vec<Sample> {
    let mut samples = series(505.0, BASE_TS, 4 * HOUR, REGION_POINTS);
    for s in samples.iter_mut().skip(20) {
        s.price = 3_400.0;
    }
    samples
}
