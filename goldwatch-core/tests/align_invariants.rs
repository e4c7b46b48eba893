use chrono::{DateTime, TimeDelta, Utc};
use goldwatch_core::{
    Faction, GoldwatchError, Realm, Region, Sample, Source, TimeSeries, align, nearest_within,
};

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn sample(sec: i64, price: f64) -> Sample {
    Sample {
        ts: t(sec),
        price,
        quantity: 10,
    }
}

fn server_series(points: &[(i64, f64)]) -> TimeSeries {
    TimeSeries::new(
        Source::Server {
            realm: Realm::new("Skyfury"),
            faction: Faction::Alliance,
        },
        points.iter().map(|&(s, p)| sample(s, p)).collect(),
    )
}

fn region_series(points: &[(i64, f64)]) -> TimeSeries {
    TimeSeries::new(
        Source::Region(Region::Us),
        points.iter().map(|&(s, p)| sample(s, p)).collect(),
    )
}

const HOUR: i64 = 3_600;

#[test]
fn hourly_server_against_four_hourly_region_is_bounded_by_coarser() {
    let server_points: Vec<(i64, f64)> = (0..24).map(|i| (i * HOUR, 100.0 + i as f64)).collect();
    let region_points: Vec<(i64, f64)> = (0..6).map(|i| (i * 4 * HOUR, 200.0 + i as f64)).collect();

    let aligned = align(&server_series(&server_points), &region_series(&region_points))
        .expect("both inputs non-empty");

    assert!(aligned.len() <= 6);
    assert_eq!(aligned.len(), 6);
    assert_eq!(aligned.times().len(), aligned.server_prices().len());
    assert_eq!(aligned.times().len(), aligned.region_prices().len());

    // Region is the coarser source, so its timestamps form the axis and the
    // server contributes its exact on-the-hour samples.
    for (i, ts) in aligned.times().iter().enumerate() {
        assert_eq!(ts.timestamp(), (i as i64) * 4 * HOUR);
        assert_eq!(aligned.region_prices()[i], 200.0 + i as f64);
        assert_eq!(aligned.server_prices()[i], 100.0 + (i as f64) * 4.0);
    }
}

#[test]
fn output_times_strictly_increase_and_runs_are_deterministic() {
    let server_points: Vec<(i64, f64)> = (0..30).map(|i| (i * HOUR, 50.0 + i as f64)).collect();
    let region_points: Vec<(i64, f64)> = (0..10)
        .map(|i| (i * 3 * HOUR + 120, 70.0 + i as f64))
        .collect();

    let server = server_series(&server_points);
    let region = region_series(&region_points);

    let first = align(&server, &region).expect("aligned");
    let second = align(&server, &region).expect("aligned");
    assert_eq!(first, second);

    for w in first.times().windows(2) {
        assert!(w[0] < w[1]);
    }
}

#[test]
fn reference_points_without_a_match_within_one_bucket_are_dropped() {
    // Server scans hourly, then goes dark until hour 21.
    let server = server_series(&[
        (0, 10.0),
        (HOUR, 11.0),
        (2 * HOUR, 12.0),
        (3 * HOUR, 13.0),
        (21 * HOUR, 14.0),
    ]);
    // Region scans every 4 hours; tolerance is therefore 4 hours.
    let region_points: Vec<(i64, f64)> = (0..5).map(|i| (i * 4 * HOUR, 30.0 + i as f64)).collect();
    let region = region_series(&region_points);

    let aligned = align(&server, &region).expect("aligned");

    // Hours 8, 12, and 16 have no server sample within 4 hours.
    assert_eq!(aligned.len(), 2);
    assert_eq!(aligned.times()[0].timestamp(), 0);
    assert_eq!(aligned.times()[1].timestamp(), 4 * HOUR);
    assert_eq!(aligned.server_prices(), &[10.0, 13.0]);
    assert_eq!(aligned.region_prices(), &[30.0, 31.0]);
}

#[test]
fn disjoint_time_ranges_produce_an_empty_series() {
    let server_points: Vec<(i64, f64)> = (0..10).map(|i| (i * HOUR, 10.0)).collect();
    let region_points: Vec<(i64, f64)> = (0..10)
        .map(|i| (1_000 * HOUR + i * HOUR, 20.0))
        .collect();

    let aligned = align(&server_series(&server_points), &region_series(&region_points))
        .expect("aligned");
    assert!(aligned.is_empty());
}

#[test]
fn single_sample_inputs_yield_at_most_one_point() {
    let server = server_series(&[(0, 10.0)]);
    let region_points: Vec<(i64, f64)> = (0..6).map(|i| (i * HOUR, 20.0)).collect();
    let region = region_series(&region_points);

    // The single-sample series cannot establish a cadence, so it is treated
    // as the coarser axis.
    let aligned = align(&server, &region).expect("aligned");
    assert!(aligned.len() <= 1);
    assert_eq!(aligned.len(), 1);
    assert_eq!(aligned.server_prices(), &[10.0]);
    assert_eq!(aligned.region_prices(), &[20.0]);

    let both_single = align(&server, &region_series(&[(1_800, 20.0)])).expect("aligned");
    assert_eq!(both_single.len(), 1);
}

#[test]
fn empty_inputs_are_rejected() {
    let empty = server_series(&[]);
    let full = region_series(&[(0, 1.0), (HOUR, 2.0)]);

    let err = align(&empty, &full).unwrap_err();
    assert!(matches!(err, GoldwatchError::EmptyInput { .. }));

    let err = align(&server_series(&[(0, 1.0)]), &region_series(&[])).unwrap_err();
    assert!(matches!(err, GoldwatchError::EmptyInput { .. }));
}

#[test]
fn nearest_within_prefers_the_earlier_sample_on_ties() {
    let samples = vec![sample(0, 1.0), sample(200, 2.0)];

    let hit = nearest_within(&samples, t(100), TimeDelta::seconds(1_000)).expect("within");
    assert_eq!(hit.ts.timestamp(), 0);

    // Strictly nearer later sample still wins.
    let hit = nearest_within(&samples, t(101), TimeDelta::seconds(1_000)).expect("within");
    assert_eq!(hit.ts.timestamp(), 200);
}

#[test]
fn nearest_within_respects_the_tolerance() {
    let samples = vec![sample(0, 1.0), sample(200, 2.0)];

    assert!(nearest_within(&samples, t(5_000), TimeDelta::seconds(60)).is_none());
    assert!(nearest_within(&samples, t(260), TimeDelta::seconds(60)).is_some());
    assert!(nearest_within(&[], t(0), TimeDelta::seconds(60)).is_none());
}
