//! # Satsboard Benchmarks
//!
//! | Benchmark | Bench file | What it measures |
//! |-----------|------------|------------------|
//! | `schedule/mined_supply` | `schedule_benchmarks` | Epoch walk for the mined supply |
//! | `schedule/block_reward` | `schedule_benchmarks` | Reward halving loop |
//! | `snapshot/compute` | `schedule_benchmarks` | Every dashboard statistic at once |
//! | `format/*` | `format_benchmarks` | Display strings and duration phrases |
//!
//! ## Usage
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package satsboard-benchmarks
//!
//! # Run one group
//! cargo bench --package satsboard-benchmarks -- schedule
//! ```

use satsboard_core::SupplySchedule;

/// Heights spread across the reward schedule, from genesis to past the last reward
pub const SAMPLE_HEIGHTS: [u64; 6] = [0, 209_999, 840_000, 1_050_000, 6_929_999, 100_000_000];

/// One height inside every halving epoch that still pays a reward
pub fn heights_per_epoch(schedule: &SupplySchedule) -> Vec<u64> {
    let interval = schedule.halving_interval();
    (0..=schedule.max_rewarded_block_height() / interval)
        .map(|epoch| epoch * interval + interval / 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_per_epoch() {
        let schedule = SupplySchedule::bitcoin();
        let heights = heights_per_epoch(&schedule);

        assert_eq!(heights.len(), 33);
        assert_eq!(heights[0], 105_000);
        assert!(heights
            .iter()
            .all(|&height| !schedule.block_reward_at_height(height).is_zero()));
    }
}
