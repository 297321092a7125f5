//! # Satoshi Amounts
//!
//! Fixed-point Bitcoin quantities held as an integer count of satoshis.
//!
//! Every operation returns a new value and none of them go through floating
//! point, so supply totals reproduce bit-for-bit. Only [`Amount::ratio_to`] and
//! [`Amount::to_btc`] leave the integer domain, and both return plain `f64`
//! rather than an `Amount`.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{DECIMALS, SATS_PER_COIN, SYMBOL};
use crate::error::AmountError;
use crate::format::group_thousands;

/// Sat remainders that are a multiple of this get their trailing zeros trimmed
const TRIM_GRANULARITY: i64 = 10_000;

/// A Bitcoin amount in satoshis
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero-value constant
    pub const ZERO: Self = Self(0);

    /// Exactly one coin
    pub const ONE_BTC: Self = Self(SATS_PER_COIN);

    /// Builds an amount from a raw satoshi count.
    pub const fn from_sats(sats: i64) -> Self {
        Self(sats)
    }

    /// Builds an amount from whole coins.
    ///
    /// Intended for constants; the product must fit in an `i64`. Use
    /// [`Amount::checked_from_coins`] for untrusted input.
    pub const fn from_coins(coins: i64) -> Self {
        Self(coins * SATS_PER_COIN)
    }

    /// Builds an amount from whole coins, reporting overflow.
    pub fn checked_from_coins(coins: i64) -> Result<Self, AmountError> {
        coins
            .checked_mul(SATS_PER_COIN)
            .map(Self)
            .ok_or_else(|| AmountError::InvalidAmount(format!("{} coins is out of range", coins)))
    }

    /// Builds `coins * SATS_PER_COIN + sats` from loosely typed numbers.
    ///
    /// Both parts are optional and default to zero. Each given part must be a
    /// finite integral value; `0.5` coins is rejected rather than turned into
    /// 50,000,000 sats.
    pub fn try_new(coins: Option<f64>, sats: Option<f64>) -> Result<Self, AmountError> {
        let coins = integral_part("coins", coins.unwrap_or(0.0))?;
        let sats = integral_part("sats", sats.unwrap_or(0.0))?;

        coins
            .checked_mul(SATS_PER_COIN)
            .and_then(|coin_sats| coin_sats.checked_add(sats))
            .map(Self)
            .ok_or_else(|| {
                AmountError::InvalidAmount(format!(
                    "{} coins and {} sats is out of range",
                    coins, sats
                ))
            })
    }

    /// Exact satoshi count.
    pub const fn to_sat(self) -> i64 {
        self.0
    }

    /// Value in coins; may be fractional.
    pub fn to_btc(self) -> f64 {
        self.0 as f64 / SATS_PER_COIN as f64
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition. Returns `None` if overflow occurred.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction. Returns `None` if overflow occurred.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_mul(self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Scales by an integer factor, e.g. a per-block reward to a yearly figure.
    pub fn multiply(self, factor: i64) -> Result<Self, AmountError> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Divides by an integer, rounding the quotient toward negative infinity.
    pub fn floor_divide(self, divisor: i64) -> Result<Self, AmountError> {
        if divisor == 0 {
            return Err(AmountError::DivisionByZero);
        }

        let quotient = self.0.checked_div(divisor).ok_or(AmountError::Overflow)?;
        let inexact = self.0 % divisor != 0;
        if inexact && ((self.0 < 0) != (divisor < 0)) {
            Ok(Self(quotient - 1))
        } else {
            Ok(Self(quotient))
        }
    }

    /// Floor division by two; the halving step.
    pub const fn halved(self) -> Self {
        Self(self.0.div_euclid(2))
    }

    /// Ratio of the two sat counts as a real number.
    pub fn ratio_to(self, other: Self) -> Result<f64, AmountError> {
        if other.0 == 0 {
            return Err(AmountError::DivisionByZero);
        }
        Ok(self.0 as f64 / other.0 as f64)
    }
}

fn integral_part(label: &str, value: f64) -> Result<i64, AmountError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(AmountError::InvalidAmount(format!(
            "{} must be integral, got {}",
            label, value
        )));
    }
    // i64::MAX rounds up to 2^63 as an f64, so the upper bound is exclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(AmountError::InvalidAmount(format!(
            "{} is out of range: {}",
            label, value
        )));
    }
    Ok(value as i64)
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<i64> for Amount {
    fn from(sats: i64) -> Self {
        Self(sats)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Renders as `₿<grouped coins>[.<sats>]`, e.g. `₿10,500,025` or `₿12.5`.
///
/// The sat remainder is zero-padded to eight digits and only trimmed when it
/// has at least four trailing zeros, so `₿0.00000010` keeps its full width.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let per_coin = SATS_PER_COIN as u64;
        let whole = magnitude / per_coin;
        let remainder = magnitude % per_coin;

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}{}", sign, SYMBOL, group_thousands(&whole.to_string()))?;

        if remainder != 0 {
            let mut digits = format!("{:0width$}", remainder, width = DECIMALS as usize);
            if remainder % TRIM_GRANULARITY as u64 == 0 {
                let trimmed = digits.trim_end_matches('0').len();
                digits.truncate(trimmed);
            }
            write!(f, ".{}", digits)?;
        }

        Ok(())
    }
}
