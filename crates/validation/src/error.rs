//! Validation error taxonomy
//!
//! One variant per business-rule violation. `Display` renders the message
//! shown to the end user; `code()` gives the stable tag tests and UIs match on.

use num_bigint::BigUint;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

use crate::calculator::format_health_factor;

/// Stable tag for each failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    RateTooHigh,
    RateNotPositive,
    DurationTooShort,
    DurationTooLong,
    ZeroCollateral,
    ZeroLoanValue,
    InsufficientCollateral,
    HealthFactorTooLow,
    NonPositiveAmount,
    MalformedAddress,
    StakeBelowMinimum,
    NotVerified,
    NotActive,
    StakeInsufficient,
    UnsupportedCurrency,
}

/// A rejected loan term, with the numbers needed to explain it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `max_rate` is in basis points; the message shows whole percent
    #[error("Interest rate cannot exceed {}%", .max_rate / 100u32)]
    RateTooHigh { max_rate: BigUint },

    #[error("Interest rate must be greater than 0")]
    RateNotPositive,

    #[error("Loan duration must be at least {minimum} days")]
    DurationTooShort { minimum: BigUint },

    #[error("Loan duration cannot exceed {maximum} days")]
    DurationTooLong { maximum: BigUint },

    #[error("Collateral value must be greater than 0")]
    ZeroCollateral,

    #[error("Loan value must be greater than 0")]
    ZeroLoanValue,

    /// `ltv` is computed independently of `ratio`; the two need not sum to 100
    #[error("Insufficient collateral ratio: {ratio}% is below the minimum of {minimum}% (LTV: {ltv}%)")]
    CollateralRatioTooLow {
        ratio: BigUint,
        minimum: BigUint,
        ltv: BigUint,
    },

    #[error("Insufficient collateral. Required: {required}, Available: {available}")]
    InsufficientCollateral {
        required: BigUint,
        available: BigUint,
    },

    #[error(
        "Health factor {} is below the minimum of {}",
        format_health_factor(.health_factor),
        format_health_factor(.minimum)
    )]
    HealthFactorTooLow {
        health_factor: BigUint,
        minimum: BigUint,
    },

    #[error("{field} must be greater than 0")]
    NonPositiveAmount { field: String },

    #[error("Invalid Ethereum address format")]
    MalformedAddress,

    #[error("Supplier stake {stake} is below the minimum of {minimum}")]
    StakeBelowMinimum { stake: BigUint, minimum: BigUint },

    #[error("Supplier is not verified")]
    NotVerified,

    #[error("Supplier is not active")]
    NotActive,

    #[error("Supplier does not meet the minimum stake requirement")]
    StakeInsufficient,

    #[error(
        "Currency {currency} is not supported. Supported currencies: {}",
        .supported.join(", ")
    )]
    UnsupportedCurrency {
        currency: String,
        supported: Vec<String>,
    },
}

impl ValidationError {
    /// Tag for this failure kind
    pub fn code(&self) -> ValidationCode {
        match self {
            ValidationError::RateTooHigh { .. } => ValidationCode::RateTooHigh,
            ValidationError::RateNotPositive => ValidationCode::RateNotPositive,
            ValidationError::DurationTooShort { .. } => ValidationCode::DurationTooShort,
            ValidationError::DurationTooLong { .. } => ValidationCode::DurationTooLong,
            ValidationError::ZeroCollateral => ValidationCode::ZeroCollateral,
            ValidationError::ZeroLoanValue => ValidationCode::ZeroLoanValue,
            ValidationError::CollateralRatioTooLow { .. }
            | ValidationError::InsufficientCollateral { .. } => {
                ValidationCode::InsufficientCollateral
            }
            ValidationError::HealthFactorTooLow { .. } => ValidationCode::HealthFactorTooLow,
            ValidationError::NonPositiveAmount { .. } => ValidationCode::NonPositiveAmount,
            ValidationError::MalformedAddress => ValidationCode::MalformedAddress,
            ValidationError::StakeBelowMinimum { .. } => ValidationCode::StakeBelowMinimum,
            ValidationError::NotVerified => ValidationCode::NotVerified,
            ValidationError::NotActive => ValidationCode::NotActive,
            ValidationError::StakeInsufficient => ValidationCode::StakeInsufficient,
            ValidationError::UnsupportedCurrency { .. } => ValidationCode::UnsupportedCurrency,
        }
    }
}
