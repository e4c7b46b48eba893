use chrono::{DateTime, Utc};
use goldwatch_core::{Sample, estimate_step_seconds};

fn s(sec: i64) -> Sample {
    Sample {
        ts: DateTime::<Utc>::from_timestamp(sec, 0).unwrap(),
        price: 1.0,
        quantity: 1,
    }
}

#[test]
fn unique_mode_wins() {
    // Adjacent deltas: 60, 60, 60, 120, 180 => unique mode is 60.
    let samples: Vec<Sample> = [0, 60, 120, 180, 300, 480].map(s).to_vec();
    assert_eq!(estimate_step_seconds(&samples), Some(60));
}

#[test]
fn tied_modes_fall_back_to_lower_median() {
    // Adjacent deltas: 60, 60, 120, 120 => lower median is 60.
    let samples: Vec<Sample> = [0, 60, 120, 240, 360].map(s).to_vec();
    assert_eq!(estimate_step_seconds(&samples), Some(60));
}

#[test]
fn order_and_duplicates_do_not_matter() {
    let samples: Vec<Sample> = [300, 0, 60, 60, 120, 180, 480].map(s).to_vec();
    assert_eq!(estimate_step_seconds(&samples), Some(60));
}

#[test]
fn too_few_distinct_timestamps_yield_none() {
    assert_eq!(estimate_step_seconds(&[]), None);
    assert_eq!(estimate_step_seconds(&[s(0)]), None);
    assert_eq!(estimate_step_seconds(&[s(0), s(0)]), None);
}

#[test]
fn sparse_outliers_do_not_shift_a_daily_cadence() {
    const DAY: i64 = 86_400;
    let mut ts: Vec<i64> = (0..20).map(|i| i * DAY).collect();
    ts.push(3 * DAY + 60); // one stray rescan
    let samples: Vec<Sample> = ts.into_iter().map(s).collect();
    assert_eq!(estimate_step_seconds(&samples), Some(DAY));
}
