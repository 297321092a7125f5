//! # Dashboard Snapshot
//!
//! Every statistic for one (block height, price) observation, computed once
//! and never mutated. A refresh loop builds a new snapshot per observation and
//! hands it to whatever renders it.

use satsboard_core::{round_to_decimal_places, Amount, AmountError, SupplySchedule};
use serde::Serialize;
use tracing::debug;

use crate::countdown::{ActivationCountdown, DifficultyAdjustmentCountdown, HalvingCountdown};
use crate::error::{EconomicsError, Result};
use crate::market::{market_cap, sats_per_unit_of_currency, SpotPrice};
use crate::metrics;

/// Statistics at a single block height
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub block_height: u64,

    /// Coins mined through `block_height`
    pub mined_supply: Amount,

    /// Reward paid at `block_height`
    pub block_reward: Amount,

    /// Supply once every reward is paid
    pub max_supply: Amount,

    /// Share of the 21M nominal cap, 4 decimals
    pub percent_mined: f64,

    pub coins_left_to_mine: Amount,

    /// Annual issuance over mined supply in percent, 4 decimals
    pub inflation_rate_percent: Option<f64>,

    /// 2 decimals; `None` once issuance has stopped
    pub stock_to_flow: Option<f64>,

    /// 2 decimals; `None` before the first block
    pub gold_pounds_per_coin: Option<f64>,

    pub population: u64,
    pub sats_per_person: Amount,

    pub halving: HalvingCountdown,
    pub difficulty_adjustment: DifficultyAdjustmentCountdown,
    pub taproot: ActivationCountdown,

    /// Market figures, present only when a price was supplied
    pub market: Option<MarketSnapshot>,
}

/// Price-dependent part of a snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub price: SpotPrice,
    pub market_cap: f64,
    pub sats_per_unit_of_currency: i64,
}

impl DashboardSnapshot {
    /// Compute every statistic for `block_height`.
    ///
    /// Ratios that are undefined at this height come back as `None`; other
    /// failures, such as a zero population, are returned as errors.
    pub fn compute(
        schedule: &SupplySchedule,
        block_height: u64,
        price: Option<SpotPrice>,
        population: u64,
    ) -> Result<Self> {
        let mined_supply = schedule.mined_supply_at_height(block_height);

        let inflation_rate_percent =
            defined(metrics::inflation_rate_percent(schedule, block_height))?
                .map(|rate| round_to_decimal_places(rate, 4));
        let stock_to_flow = defined(metrics::stock_to_flow(schedule, block_height))?
            .map(|ratio| round_to_decimal_places(ratio, 2));
        let gold_pounds_per_coin = defined(metrics::gold_pounds_per_coin(schedule, block_height))?
            .map(|pounds| round_to_decimal_places(pounds, 2));

        let market = price.map(|price| MarketSnapshot {
            price,
            market_cap: market_cap(schedule, block_height, price),
            sats_per_unit_of_currency: sats_per_unit_of_currency(price),
        });

        let snapshot = Self {
            block_height,
            mined_supply,
            block_reward: schedule.block_reward_at_height(block_height),
            max_supply: schedule.max_supply(),
            percent_mined: round_to_decimal_places(
                metrics::percent_mined(schedule, block_height),
                4,
            ),
            coins_left_to_mine: metrics::coins_left_to_mine(schedule, block_height),
            inflation_rate_percent,
            stock_to_flow,
            gold_pounds_per_coin,
            population,
            sats_per_person: metrics::sats_per_person(schedule, block_height, population)?,
            halving: HalvingCountdown::at(schedule, block_height),
            difficulty_adjustment: DifficultyAdjustmentCountdown::at(block_height),
            taproot: ActivationCountdown::taproot(block_height),
            market,
        };

        debug!(
            block_height,
            mined_sats = mined_supply.to_sat(),
            priced = snapshot.market.is_some(),
            "dashboard snapshot computed"
        );

        Ok(snapshot)
    }
}

/// Maps "undefined at this height" to `None`, keeping real failures as errors
fn defined(result: Result<f64>) -> Result<Option<f64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(EconomicsError::Amount(AmountError::DivisionByZero)) => Ok(None),
        Err(err) => Err(err),
    }
}
