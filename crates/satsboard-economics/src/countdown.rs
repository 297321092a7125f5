//! # Countdowns
//!
//! Blocks remaining until scheduled network events, with progress through the
//! current period and a wall-clock estimate at ten minutes per block.

use satsboard_core::{duration_phrase_from_block_count, HalvingProjection, SupplySchedule};
use serde::Serialize;
use tracing::debug;

use crate::constants::{DIFFICULTY_ADJUSTMENT_INTERVAL, TAPROOT_ACTIVATION_HEIGHT};

/// Progress toward the next reward halving
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HalvingCountdown {
    /// Rewards are still being paid
    Pending {
        blocks_remaining: u64,
        /// Share of the current epoch already mined
        progress_percent: f64,
        next: HalvingProjection,
    },
    /// The reward has reached zero; there is nothing left to halve
    Complete,
}

impl HalvingCountdown {
    pub fn at(schedule: &SupplySchedule, block_height: u64) -> Self {
        if schedule.is_fully_mined(block_height) {
            debug!(block_height, "all rewards paid");
            return Self::Complete;
        }

        let next = schedule.next_halving(block_height);
        let blocks_remaining = next.block_height - block_height;
        let progress_percent =
            100.0 - blocks_remaining as f64 / schedule.halving_interval() as f64 * 100.0;

        Self::Pending {
            blocks_remaining,
            progress_percent,
            next,
        }
    }

    pub fn blocks_remaining(&self) -> Option<u64> {
        match self {
            Self::Pending {
                blocks_remaining, ..
            } => Some(*blocks_remaining),
            Self::Complete => None,
        }
    }

    /// Approximate time until the halving
    pub fn duration_phrase(&self) -> Option<String> {
        self.blocks_remaining().map(duration_phrase_from_block_count)
    }

    /// `reduced to ₿1.5625`, or `removed` when the next reward is zero
    pub fn reward_phrase(&self) -> Option<String> {
        match self {
            Self::Pending { next, .. } if next.block_reward.is_zero() => {
                Some("removed".to_string())
            }
            Self::Pending { next, .. } => Some(format!("reduced to {}", next.block_reward)),
            Self::Complete => None,
        }
    }
}

/// Progress toward the next difficulty retarget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DifficultyAdjustmentCountdown {
    pub blocks_remaining: u64,
    pub progress_percent: f64,
}

impl DifficultyAdjustmentCountdown {
    /// A height on a retarget boundary starts a fresh period of 2016 blocks.
    pub fn at(block_height: u64) -> Self {
        let blocks_remaining =
            DIFFICULTY_ADJUSTMENT_INTERVAL - block_height % DIFFICULTY_ADJUSTMENT_INTERVAL;
        let progress_percent = (DIFFICULTY_ADJUSTMENT_INTERVAL - blocks_remaining) as f64
            / DIFFICULTY_ADJUSTMENT_INTERVAL as f64
            * 100.0;

        Self {
            blocks_remaining,
            progress_percent,
        }
    }

    pub fn duration_phrase(&self) -> String {
        duration_phrase_from_block_count(self.blocks_remaining)
    }
}

/// Countdown to a fixed activation height such as a soft fork
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActivationCountdown {
    Pending {
        target_height: u64,
        blocks_remaining: u64,
    },
    Activated {
        target_height: u64,
    },
}

impl ActivationCountdown {
    pub fn at(target_height: u64, block_height: u64) -> Self {
        if block_height >= target_height {
            Self::Activated { target_height }
        } else {
            Self::Pending {
                target_height,
                blocks_remaining: target_height - block_height,
            }
        }
    }

    /// Countdown to Taproot activation
    pub fn taproot(block_height: u64) -> Self {
        Self::at(TAPROOT_ACTIVATION_HEIGHT, block_height)
    }

    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated { .. })
    }

    pub fn duration_phrase(&self) -> Option<String> {
        match self {
            Self::Pending {
                blocks_remaining, ..
            } => Some(duration_phrase_from_block_count(*blocks_remaining)),
            Self::Activated { .. } => None,
        }
    }
}
