//! Error types for dashboard statistics

use satsboard_core::AmountError;
use thiserror::Error;

/// Result type alias for economics operations
pub type Result<T> = std::result::Result<T, EconomicsError>;

/// Errors raised while deriving statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomicsError {
    /// Spot price was zero, negative or not finite
    #[error("Invalid spot price: {0}")]
    InvalidPrice(f64),

    /// Population figure of zero
    #[error("Population must be positive")]
    InvalidPopulation,

    #[error(transparent)]
    Amount(#[from] AmountError),
}

impl EconomicsError {
    /// Get the error code for display layers
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidPrice(_) => 2001,
            Self::InvalidPopulation => 2002,
            Self::Amount(err) => err.code(),
        }
    }
}
