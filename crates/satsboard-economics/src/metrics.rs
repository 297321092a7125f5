//! # Supply Metrics
//!
//! Statistics that depend only on the block height.
//!
//! Issuance is annualized as `reward × 144 blocks × 365 days`, i.e. the rate a
//! year of blocks would pay if the current reward held all year.

use satsboard_core::{Amount, AmountError, SupplySchedule};

use crate::constants::*;
use crate::error::{EconomicsError, Result};

/// Coins a year of blocks pays at the current reward
pub fn annualized_issuance(schedule: &SupplySchedule, block_height: u64) -> Result<Amount> {
    let reward = schedule.block_reward_at_height(block_height);
    Ok(reward.multiply(BLOCKS_PER_DAY * DAYS_PER_YEAR)?)
}

/// Annual issuance as a percentage of the coins mined so far.
///
/// Undefined at height 0, where nothing has been mined yet.
pub fn inflation_rate_percent(schedule: &SupplySchedule, block_height: u64) -> Result<f64> {
    let issuance = annualized_issuance(schedule, block_height)?;
    let mined = schedule.mined_supply_at_height(block_height);
    Ok(issuance.ratio_to(mined)? * 100.0)
}

/// Years of current issuance needed to produce the existing supply.
///
/// Undefined once the reward is zero.
pub fn stock_to_flow(schedule: &SupplySchedule, block_height: u64) -> Result<f64> {
    let issuance = annualized_issuance(schedule, block_height)?;
    let mined = schedule.mined_supply_at_height(block_height);
    Ok(mined.ratio_to(issuance)?)
}

/// Share of the 21 million nominal cap mined so far, in percent
pub fn percent_mined(schedule: &SupplySchedule, block_height: u64) -> f64 {
    let cap = Amount::from_coins(NOMINAL_SUPPLY_CAP_COINS);
    let mined = schedule.mined_supply_at_height(block_height);
    mined.to_sat() as f64 / cap.to_sat() as f64 * 100.0
}

/// Coins still to be issued before the nominal cap
pub fn coins_left_to_mine(schedule: &SupplySchedule, block_height: u64) -> Amount {
    Amount::from_coins(NOMINAL_SUPPLY_CAP_COINS) - schedule.mined_supply_at_height(block_height)
}

/// Pounds of above-ground gold per mined coin.
///
/// If the two markets were valued equally, one coin would buy this much gold.
pub fn gold_pounds_per_coin(schedule: &SupplySchedule, block_height: u64) -> Result<f64> {
    let mined = schedule.mined_supply_at_height(block_height);
    if mined.is_zero() {
        return Err(AmountError::DivisionByZero.into());
    }
    Ok(GOLD_SUPPLY_METRIC_TONS * POUNDS_PER_METRIC_TON / mined.to_btc())
}

/// Mined supply split evenly across `population` people, rounded down
pub fn sats_per_person(
    schedule: &SupplySchedule,
    block_height: u64,
    population: u64,
) -> Result<Amount> {
    if population == 0 {
        return Err(EconomicsError::InvalidPopulation);
    }
    let divisor = i64::try_from(population).unwrap_or(i64::MAX);
    Ok(schedule
        .mined_supply_at_height(block_height)
        .floor_divide(divisor)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOURTH_EPOCH: u64 = 840_000;

    #[test]
    fn test_annualized_issuance() {
        let schedule = SupplySchedule::bitcoin();

        assert_eq!(
            annualized_issuance(&schedule, 0).unwrap(),
            Amount::from_coins(2_628_000)
        );
        assert_eq!(
            annualized_issuance(&schedule, FOURTH_EPOCH).unwrap(),
            Amount::from_coins(164_250)
        );
        assert_eq!(annualized_issuance(&schedule, 7_000_000).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_inflation_rate() {
        let schedule = SupplySchedule::bitcoin();

        let rate = inflation_rate_percent(&schedule, FOURTH_EPOCH).unwrap();
        assert!((rate - 0.834_285_7).abs() < 1e-6);

        assert_eq!(
            inflation_rate_percent(&schedule, 0),
            Err(EconomicsError::Amount(AmountError::DivisionByZero))
        );
        assert_eq!(inflation_rate_percent(&schedule, 7_000_000).unwrap(), 0.0);
    }

    #[test]
    fn test_stock_to_flow() {
        let schedule = SupplySchedule::bitcoin();

        let ratio = stock_to_flow(&schedule, FOURTH_EPOCH).unwrap();
        assert!((ratio - 119.863_013).abs() < 1e-6);

        assert!(stock_to_flow(&schedule, 7_000_000).is_err());
    }

    #[test]
    fn test_percent_mined_and_coins_left() {
        let schedule = SupplySchedule::bitcoin();

        assert_eq!(percent_mined(&schedule, 0), 0.0);
        assert_eq!(percent_mined(&schedule, 210_000), 50.0);
        assert_eq!(percent_mined(&schedule, FOURTH_EPOCH), 93.75);

        assert_eq!(coins_left_to_mine(&schedule, 210_000), Amount::from_coins(10_500_000));
        assert_eq!(
            coins_left_to_mine(&schedule, 100_000_000),
            Amount::from_sats(2_310_000)
        );
    }

    #[test]
    fn test_gold_parity() {
        let schedule = SupplySchedule::bitcoin();

        let pounds = gold_pounds_per_coin(&schedule, FOURTH_EPOCH).unwrap();
        assert!((pounds - 22.982_694).abs() < 1e-5);
        assert!(gold_pounds_per_coin(&schedule, 0).is_err());
    }

    #[test]
    fn test_sats_per_person() {
        let schedule = SupplySchedule::bitcoin();

        let share = sats_per_person(&schedule, FOURTH_EPOCH, 8_000_000_000).unwrap();
        assert_eq!(share, Amount::from_sats(246_093));

        assert_eq!(
            sats_per_person(&schedule, FOURTH_EPOCH, 0),
            Err(EconomicsError::InvalidPopulation)
        );
        assert_eq!(sats_per_person(&schedule, FOURTH_EPOCH, u64::MAX).unwrap(), Amount::ZERO);
    }
}
