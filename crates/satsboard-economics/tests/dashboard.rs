//! Integration tests for dashboard statistics
//!
//! These tests drive the statistics the way a refresh loop does: one snapshot
//! per observed height, checked against the raw schedule.

use proptest::prelude::*;
use satsboard_core::{Amount, SupplySchedule};
use satsboard_economics::{
    coins_left_to_mine, percent_mined, ActivationCountdown, DashboardSnapshot,
    DifficultyAdjustmentCountdown, EconomicsError, HalvingCountdown, SpotPrice,
    DEFAULT_WORLD_POPULATION,
};

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_snapshots_across_halvings() {
        let schedule = SupplySchedule::bitcoin();
        let heights = [1u64, 209_999, 210_000, 420_000, 630_000, 840_000, 1_050_000];

        let snapshots: Vec<DashboardSnapshot> = heights
            .iter()
            .map(|&height| {
                DashboardSnapshot::compute(&schedule, height, None, DEFAULT_WORLD_POPULATION)
                    .expect("snapshot should compute")
            })
            .collect();

        for pair in snapshots.windows(2) {
            assert!(pair[0].mined_supply <= pair[1].mined_supply);
            assert!(pair[0].block_reward >= pair[1].block_reward);
        }

        for snapshot in &snapshots {
            assert_eq!(
                snapshot.mined_supply + snapshot.coins_left_to_mine,
                Amount::from_coins(21_000_000)
            );
        }
    }

    #[test]
    fn test_inflation_falls_after_each_halving() {
        let schedule = SupplySchedule::bitcoin();
        let mut previous = f64::INFINITY;

        for epoch in 1..10u64 {
            let snapshot = DashboardSnapshot::compute(
                &schedule,
                epoch * 210_000,
                None,
                DEFAULT_WORLD_POPULATION,
            )
            .unwrap();
            let rate = snapshot.inflation_rate_percent.unwrap();
            assert!(rate < previous, "inflation rose at epoch {}", epoch);
            previous = rate;
        }
    }

    #[test]
    fn test_priced_snapshot_json() {
        let schedule = SupplySchedule::bitcoin();
        let price = SpotPrice::new(100_000.0).unwrap();
        let snapshot =
            DashboardSnapshot::compute(&schedule, 840_000, Some(price), 8_000_000_000).unwrap();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["market"]["price"], 100_000.0);
        assert_eq!(json["market"]["sats_per_unit_of_currency"], 1_000);
        assert_eq!(json["taproot"]["status"], "activated");
        assert_eq!(json["difficulty_adjustment"]["blocks_remaining"], 672);
    }

    #[test]
    fn test_invalid_price_is_rejected_before_snapshot() {
        assert_eq!(SpotPrice::new(-5.0), Err(EconomicsError::InvalidPrice(-5.0)));
    }
}

mod countdown_tests {
    use super::*;

    #[test]
    fn test_countdowns_agree_with_schedule() {
        let schedule = SupplySchedule::bitcoin();

        for height in [0u64, 12_345, 209_999, 210_000, 900_000] {
            let remaining = HalvingCountdown::at(&schedule, height)
                .blocks_remaining()
                .unwrap();
            assert_eq!(height + remaining, schedule.next_halving(height).block_height);
        }
    }

    #[test]
    fn test_activation_boundary() {
        assert!(!ActivationCountdown::at(100, 99).is_activated());
        assert!(ActivationCountdown::at(100, 100).is_activated());
    }
}

proptest! {
    #[test]
    fn percent_mined_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
        let schedule = SupplySchedule::bitcoin();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percent_mined(&schedule, low) <= percent_mined(&schedule, high));
        prop_assert!(coins_left_to_mine(&schedule, low) >= coins_left_to_mine(&schedule, high));
    }

    #[test]
    fn difficulty_countdown_stays_in_period(height in any::<u64>()) {
        let countdown = DifficultyAdjustmentCountdown::at(height);
        prop_assert!(countdown.blocks_remaining >= 1);
        prop_assert!(countdown.blocks_remaining <= 2016);
        prop_assert!(countdown.progress_percent >= 0.0 && countdown.progress_percent < 100.0);
        prop_assert_eq!((height % 2016) + countdown.blocks_remaining, 2016);
    }
}
