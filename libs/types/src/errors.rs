//! Error types for request validation
//!
//! One variant per rejection rule. The `Display` text is what callers see.

use thiserror::Error;

/// Reason a simulation request was rejected.
///
/// Variants are listed in the order the validator checks them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("configuration missing")]
    ConfigurationMissing,

    #[error("starting amount must be greater than 0")]
    InvalidStartingAmount,

    #[error("bet amount must be greater than 0")]
    InvalidBetAmount,

    #[error("starting amount must be greater than or equal to bet amount")]
    BetExceedsStartingAmount,

    #[error("win ratio must be between 0 and 1")]
    InvalidWinRatio,

    #[error("round count must not be negative")]
    NegativeRoundCount,
}

impl ValidationError {
    /// Stable machine-readable code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ConfigurationMissing => "CONFIGURATION_MISSING",
            ValidationError::InvalidStartingAmount => "INVALID_STARTING_AMOUNT",
            ValidationError::InvalidBetAmount => "INVALID_BET_AMOUNT",
            ValidationError::BetExceedsStartingAmount => "BET_EXCEEDS_STARTING_AMOUNT",
            ValidationError::InvalidWinRatio => "INVALID_WIN_RATIO",
            ValidationError::NegativeRoundCount => "NEGATIVE_ROUND_COUNT",
        }
    }
}
