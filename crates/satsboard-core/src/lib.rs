//! # Satsboard Core
//!
//! Exact monetary-supply arithmetic behind the satsboard dashboard.
//!
//! This crate provides the building blocks every statistic is derived from:
//! - `Amount` - A satoshi-denominated quantity with integer-only arithmetic
//! - `SupplySchedule` - Block height to mined supply, block reward and next halving
//! - `format` - Digit grouping, magnitude words and decimal rounding
//! - `duration` - Block counts rendered as wall-clock phrases
//!
//! ## Halving Schedule
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Heights                 Block Reward     Mined at epoch end │
//! ├──────────────────────────────────────────────────────────────┤
//! │  0 - 209,999             ₿50              ₿10,500,000        │
//! │  210,000 - 419,999       ₿25              ₿15,750,000        │
//! │  420,000 - 629,999       ₿12.5            ₿18,375,000        │
//! │  630,000 - 839,999       ₿6.25            ₿19,687,500        │
//! │  840,000 - 1,049,999     ₿3.125           ...                │
//! │  ...                                                         │
//! │  6,930,000 and above     ₿0               ₿20,999,999.9769   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rewards halve by integer floor division of the satoshi count, which is why
//! the converged supply lands just short of 21 million.

pub mod amount;
pub mod duration;
pub mod error;
pub mod format;
pub mod schedule;

pub use amount::Amount;
pub use duration::duration_phrase_from_block_count;
pub use error::{AmountError, CoreError, Result, ScheduleError};
pub use format::{
    format_grouped_digits, format_grouped_integer, format_magnitude_word, format_number,
    pluralize_grouped_if_not_one, pluralize_if_not_one, round_to_decimal_places, NumberFormat,
};
pub use schedule::{HalvingProjection, SupplySchedule};

/// Bitcoin monetary constants
pub mod constants {
    /// Currency symbol prefixed to displayed amounts
    pub const SYMBOL: &str = "₿";

    /// Number of subunit digits after the decimal point
    pub const DECIMALS: u32 = 8;

    /// One coin in satoshis
    pub const SATS_PER_COIN: i64 = 100_000_000;

    /// Blocks between reward halvings
    pub const HALVING_INTERVAL_BLOCKS: u64 = 210_000;

    /// Reward paid by the first block, in whole coins
    pub const INITIAL_BLOCK_REWARD_COINS: i64 = 50;

    /// Target spacing between blocks
    pub const MINUTES_PER_BLOCK: u64 = 10;
}

pub use constants::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::amount::Amount;
    pub use crate::error::{AmountError, CoreError, Result, ScheduleError};
    pub use crate::schedule::{HalvingProjection, SupplySchedule};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sats_per_coin_matches_decimals() {
        assert_eq!(SATS_PER_COIN, 10i64.pow(DECIMALS));
    }

    #[test]
    fn test_initial_reward() {
        assert_eq!(
            Amount::from_coins(INITIAL_BLOCK_REWARD_COINS).to_sat(),
            5_000_000_000
        );
    }
}
