//! # Satsboard Economics - Dashboard Statistics
//!
//! Derived monetary statistics computed from a block height and, where a
//! market figure is involved, a spot price.
//!
//! ## Statistics
//!
//! | Statistic | Inputs | Definition |
//! |-----------|--------|------------|
//! | Annual inflation | height | reward × 144 × 365 / mined |
//! | Stock to flow | height | mined / (reward × 144 × 365) |
//! | Percent mined | height | mined / 21,000,000 |
//! | Gold supply parity | height | above-ground gold (lb) / mined coins |
//! | Sats per person | height, population | mined ÷ population (floor) |
//! | Market cap | height, price | mined coins × price |
//! | Sats per dollar | price | 10⁸ / price |
//!
//! Countdowns to the next halving, difficulty adjustment or a soft-fork
//! activation height live in [`countdown`]. [`DashboardSnapshot`] bundles
//! everything into one immutable value for a renderer.

pub mod countdown;
pub mod error;
pub mod market;
pub mod metrics;
pub mod snapshot;

// Re-exports
pub use countdown::{ActivationCountdown, DifficultyAdjustmentCountdown, HalvingCountdown};
pub use error::{EconomicsError, Result};
pub use market::{market_cap, sats_per_unit_of_currency, SpotPrice};
pub use metrics::{
    annualized_issuance, coins_left_to_mine, gold_pounds_per_coin, inflation_rate_percent,
    percent_mined, sats_per_person, stock_to_flow,
};
pub use snapshot::DashboardSnapshot;

/// Dashboard constants
pub mod constants {
    /// Expected blocks per day at ten-minute spacing
    pub const BLOCKS_PER_DAY: i64 = 144;

    /// Days used to annualize issuance
    pub const DAYS_PER_YEAR: i64 = 365;

    /// Blocks between difficulty retargets
    pub const DIFFICULTY_ADJUSTMENT_INTERVAL: u64 = 2016;

    /// Taproot soft-fork activation height
    pub const TAPROOT_ACTIVATION_HEIGHT: u64 = 709_632;

    /// Advertised supply cap in whole coins
    pub const NOMINAL_SUPPLY_CAP_COINS: i64 = 21_000_000;

    /// Above-ground gold, metric tons
    pub const GOLD_SUPPLY_METRIC_TONS: f64 = 205_238.0;

    /// Pounds per metric ton
    pub const POUNDS_PER_METRIC_TON: f64 = 2204.62;

    /// Fallback world population when none is configured
    pub const DEFAULT_WORLD_POPULATION: u64 = 8_000_000_000;
}

pub use constants::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_per_year() {
        assert_eq!(BLOCKS_PER_DAY * DAYS_PER_YEAR, 52_560);
    }

    #[test]
    fn test_gold_supply_pounds() {
        let pounds = GOLD_SUPPLY_METRIC_TONS * POUNDS_PER_METRIC_TON;
        assert!((pounds - 452_471_799.56).abs() < 0.01);
    }
}
