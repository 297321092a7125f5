//! Error types for satsboard core operations

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by [`Amount`](crate::Amount) construction and arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    /// Coin or sat input was fractional, non-finite or out of range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Ratio or floor division against zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in the satoshi counter
    #[error("Overflow on amount arithmetic")]
    Overflow,
}

/// Errors raised when building a [`SupplySchedule`](crate::SupplySchedule)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Halving interval must be at least one block")]
    ZeroHalvingInterval,

    #[error("Initial block reward must be positive, got {sats} sats")]
    NonPositiveReward { sats: i64 },

    #[error("Converged supply of {interval} blocks at {sats} sats overflows")]
    SupplyOverflow { interval: u64, sats: i64 },
}

/// Errors that can occur in satsboard core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl AmountError {
    /// Stable numeric code for display layers
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidAmount(_) => 1001,
            Self::DivisionByZero => 1002,
            Self::Overflow => 1003,
        }
    }
}

impl CoreError {
    /// Get the error code for display layers
    pub fn code(&self) -> u32 {
        match self {
            Self::Amount(err) => err.code(),
            Self::Schedule(_) => 1100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AmountError::InvalidAmount("0.5".into()).code(), 1001);
        assert_eq!(CoreError::from(AmountError::DivisionByZero).code(), 1002);
        assert_eq!(
            CoreError::from(ScheduleError::ZeroHalvingInterval).code(),
            1100
        );
    }

    #[test]
    fn test_error_display() {
        let err = AmountError::InvalidAmount("coins must be integral, got 0.5".into());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid amount"));
        assert!(msg.contains("0.5"));

        let err = CoreError::from(AmountError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }
}
