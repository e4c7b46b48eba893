use chrono::{DateTime, Utc};
use goldwatch_core::{Faction, Realm, Region, Sample, Source, TimeSeries, align};
use proptest::prelude::*;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn series_from(source: Source, points: Vec<(i64, f64)>) -> TimeSeries {
    TimeSeries::new(
        source,
        points
            .into_iter()
            .map(|(sec, price)| Sample {
                ts: t(sec),
                price,
                quantity: 1,
            })
            .collect(),
    )
}

fn server_source() -> Source {
    Source::Server {
        realm: Realm::new("Skyfury"),
        faction: Faction::Alliance,
    }
}

/// Irregular but plausible scan times: a base cadence with per-point jitter.
fn arb_points(
    step: i64,
    max_len: usize,
) -> impl Strategy<Value = Vec<(i64, f64)>> {
    proptest::collection::vec((0i64..(step / 4).max(1), 1.0f64..10_000.0), 2..max_len).prop_map(
        move |jittered| {
            jittered
                .into_iter()
                .enumerate()
                .map(|(i, (jitter, price))| (i as i64 * step + jitter, price))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn alignment_invariants_hold_for_irregular_cadences(
        server_points in arb_points(3_600, 50),
        region_points in arb_points(14_400, 20),
    ) {
        let server = series_from(server_source(), server_points);
        let region = series_from(Source::Region(Region::Eu), region_points);

        let aligned = align(&server, &region).expect("non-empty inputs");

        // Equal-length invariant.
        prop_assert_eq!(aligned.times().len(), aligned.server_prices().len());
        prop_assert_eq!(aligned.times().len(), aligned.region_prices().len());

        // Bounded by the reference (coarser) series.
        prop_assert!(aligned.len() <= server.len().max(region.len()));

        // Strict monotonicity of the shared axis.
        for w in aligned.times().windows(2) {
            prop_assert!(w[0] < w[1]);
        }

        // Determinism: aligning again yields the identical result.
        let again = align(&server, &region).expect("non-empty inputs");
        prop_assert_eq!(aligned, again);
    }

    #[test]
    fn every_aligned_price_comes_from_an_input_sample(
        server_points in arb_points(3_600, 40),
        region_points in arb_points(10_800, 15),
    ) {
        let server = series_from(server_source(), server_points);
        let region = series_from(Source::Region(Region::Us), region_points);

        let aligned = align(&server, &region).expect("non-empty inputs");
        for &p in aligned.server_prices() {
            prop_assert!(server.samples().iter().any(|s| s.price == p));
        }
        for &p in aligned.region_prices() {
            prop_assert!(region.samples().iter().any(|s| s.price == p));
        }
    }
}
