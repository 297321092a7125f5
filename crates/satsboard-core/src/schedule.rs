//! # Supply Schedule
//!
//! Maps a block height to issuance facts: coins mined so far, the reward paid
//! at that height and the next halving.
//!
//! The reward starts at 50 coins and is floor-divided by two in satoshis every
//! 210,000 blocks until it reaches zero after 33 halvings. Each halving is a
//! separate floor division, never a single shift by the epoch count, so the
//! schedule matches the integer rounding the network itself applies.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::amount::Amount;
use crate::constants::{HALVING_INTERVAL_BLOCKS, INITIAL_BLOCK_REWARD_COINS};
use crate::error::ScheduleError;

/// The next halving after some block height
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalvingProjection {
    /// First block paying the reduced reward
    pub block_height: u64,

    /// Reward in effect from `block_height` on
    pub block_reward: Amount,
}

/// Halving issuance schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SupplySchedule {
    /// Blocks between halvings
    halving_interval: u64,

    /// Reward paid during the first epoch
    initial_reward: Amount,
}

impl Default for SupplySchedule {
    fn default() -> Self {
        Self::bitcoin()
    }
}

impl SupplySchedule {
    /// Bitcoin mainnet parameters
    pub const fn bitcoin() -> Self {
        Self {
            halving_interval: HALVING_INTERVAL_BLOCKS,
            initial_reward: Amount::from_coins(INITIAL_BLOCK_REWARD_COINS),
        }
    }

    /// Create a schedule with custom parameters.
    ///
    /// Total issuance is bounded by `2 * initial_reward * halving_interval`;
    /// parameters whose bound does not fit in an `i64` are rejected so every
    /// query below stays exact.
    pub fn new(halving_interval: u64, initial_reward: Amount) -> Result<Self, ScheduleError> {
        if halving_interval == 0 {
            return Err(ScheduleError::ZeroHalvingInterval);
        }
        if initial_reward.to_sat() <= 0 {
            return Err(ScheduleError::NonPositiveReward {
                sats: initial_reward.to_sat(),
            });
        }

        let overflow = ScheduleError::SupplyOverflow {
            interval: halving_interval,
            sats: initial_reward.to_sat(),
        };
        let interval = i64::try_from(halving_interval).map_err(|_| overflow.clone())?;
        initial_reward
            .to_sat()
            .checked_mul(interval)
            .and_then(|epoch| epoch.checked_mul(2))
            .ok_or(overflow)?;

        Ok(Self {
            halving_interval,
            initial_reward,
        })
    }

    pub fn halving_interval(&self) -> u64 {
        self.halving_interval
    }

    pub fn initial_reward(&self) -> Amount {
        self.initial_reward
    }

    /// Number of completed halving epochs at `block_height`
    pub fn halving_epoch(&self, block_height: u64) -> u64 {
        block_height / self.halving_interval
    }

    /// Total reward paid by blocks 1 through `block_height`.
    ///
    /// Walks epoch by epoch, so the cost is bounded by the number of halvings
    /// rather than the height.
    pub fn mined_supply_at_height(&self, block_height: u64) -> Amount {
        let mut remaining = block_height;
        let mut reward = self.initial_reward;
        let mut mined = Amount::ZERO;

        while remaining > self.halving_interval && !reward.is_zero() {
            remaining -= self.halving_interval;
            mined = mined.saturating_add(reward.saturating_mul(self.interval_blocks()));
            reward = reward.halved();
        }

        if !reward.is_zero() {
            mined = mined.saturating_add(reward.saturating_mul(remaining as i64));
        }

        trace!(block_height, sats = mined.to_sat(), "mined supply");
        mined
    }

    /// Reward paid by the block at `block_height`
    pub fn block_reward_at_height(&self, block_height: u64) -> Amount {
        let mut reward = self.initial_reward;
        for _ in 0..self.halving_epoch(block_height) {
            if reward.is_zero() {
                break;
            }
            reward = reward.halved();
        }
        reward
    }

    /// First halving strictly after `block_height`.
    ///
    /// Heights within one interval of `u64::MAX` saturate.
    pub fn next_halving(&self, block_height: u64) -> HalvingProjection {
        let next_height = self
            .halving_epoch(block_height)
            .saturating_add(1)
            .saturating_mul(self.halving_interval);
        HalvingProjection {
            block_height: next_height,
            block_reward: self.block_reward_at_height(next_height),
        }
    }

    /// Last height whose block still pays a nonzero reward.
    pub fn max_rewarded_block_height(&self) -> u64 {
        let mut reward = self.initial_reward;
        let mut rewarded_epochs: u64 = 0;
        while !reward.is_zero() {
            rewarded_epochs += 1;
            reward = reward.halved();
        }
        rewarded_epochs.saturating_mul(self.halving_interval) - 1
    }

    /// Supply once every reward has been paid
    pub fn max_supply(&self) -> Amount {
        let mut reward = self.initial_reward;
        let mut total = Amount::ZERO;
        while !reward.is_zero() {
            total = total.saturating_add(reward.saturating_mul(self.interval_blocks()));
            reward = reward.halved();
        }
        total
    }

    /// Whether every block from `block_height` on pays nothing
    pub fn is_fully_mined(&self, block_height: u64) -> bool {
        block_height > self.max_rewarded_block_height()
    }

    fn interval_blocks(&self) -> i64 {
        // Bounded by the check in `new`.
        self.halving_interval as i64
    }
}
