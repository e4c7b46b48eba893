use goldwatch_core::{ReanchorPolicy, RngNoise, repair_paired_prices};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn clean_series_pass_through_untouched(
        server in proptest::collection::vec(1.0f64..1_000.0, 14..60),
        seed in any::<u64>(),
    ) {
        // Keep every delta at or below the threshold multiple.
        let mut region: Vec<f64> = server.iter().map(|s| s * 3.5).collect();
        let before = region.clone();

        let mut noise = RngNoise(StdRng::seed_from_u64(seed));
        repair_paired_prices(&server, &mut region, 3.0, ReanchorPolicy::Fixed, &mut noise)
            .expect("valid threshold");
        prop_assert_eq!(region, before);
    }

    #[test]
    fn spike_runs_are_bounded_by_the_window_spread(
        len in 20usize..60,
        start in 13usize..18,
        spike_mult in 5.0f64..50.0,
        seed in any::<u64>(),
    ) {
        let server = vec![10.0f64; len];
        let mut region: Vec<f64> = (0..len)
            .map(|i| 11.0 + f64::from(u8::try_from(i % 4).unwrap()))
            .collect();
        for r in region.iter_mut().skip(start) {
            *r = 10.0 * spike_mult;
        }
        let anchor = region[start - 1];
        let window: Vec<f64> = (start - 12..start).map(|x| region[x] - 10.0).collect();
        let mean = window.iter().sum::<f64>() / 12.0;
        let stdev = (window.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / 12.0).sqrt();

        let clean_prefix = region[..start].to_vec();
        let mut noise = RngNoise(StdRng::seed_from_u64(seed));
        repair_paired_prices(&server, &mut region, 3.0, ReanchorPolicy::Fixed, &mut noise)
            .expect("valid threshold");

        prop_assert_eq!(&region[..start], clean_prefix.as_slice());
        for (i, &price) in region.iter().enumerate().skip(start) {
            prop_assert!(
                (price - anchor).abs() <= stdev + 1e-9,
                "index {}: {} outside {} +/- {}", i, price, anchor, stdev
            );
            // The window spread is tiny next to the threshold, so every
            // rewritten point must sit back below it.
            prop_assert!(price - server[i] <= 3.0 * server[i]);
        }
    }
}
