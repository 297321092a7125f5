//! Price-dependent statistics

use satsboard_core::{SupplySchedule, SATS_PER_COIN};
use serde::{Serialize, Serializer};

use crate::error::{EconomicsError, Result};

/// Spot price of one coin in the display currency
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SpotPrice(f64);

impl SpotPrice {
    /// Accepts finite, strictly positive prices only
    pub fn new(price: f64) -> Result<Self> {
        if price.is_finite() && price > 0.0 {
            Ok(Self(price))
        } else {
            Err(EconomicsError::InvalidPrice(price))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SpotPrice {
    type Error = EconomicsError;

    fn try_from(price: f64) -> Result<Self> {
        Self::new(price)
    }
}

impl Serialize for SpotPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Value of every mined coin at `price`
pub fn market_cap(schedule: &SupplySchedule, block_height: u64, price: SpotPrice) -> f64 {
    schedule.mined_supply_at_height(block_height).to_btc() * price.value()
}

/// Satoshis one unit of the display currency buys, rounded to the nearest sat
pub fn sats_per_unit_of_currency(price: SpotPrice) -> i64 {
    (SATS_PER_COIN as f64 / price.value()).round() as i64
}
