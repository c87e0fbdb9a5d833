//! Amount - Fixed-point token amounts
//!
//! Token amounts are integers in the token's smallest unit (wei, cents...),
//! scaled by `10^decimals`. They are never converted to floating point.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// Decimals used by most ERC-20 tokens and ETH itself
pub const DEFAULT_DECIMALS: u32 = 18;

/// Errors raised when a caller hands us a string that is not a number.
///
/// These are precondition failures, not business-rule violations: callers
/// are expected to pre-validate user input before parsing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid numeric string: {0:?}")]
    InvalidNumber(String),

    #[error("Numeric string has more than one decimal point: {0:?}")]
    MultipleDecimalPoints(String),
}

/// `10^decimals` as a big integer
pub fn scale(decimals: u32) -> BigUint {
    BigUint::from(10u32).pow(decimals)
}

/// Render a fixed-point amount as a human readable decimal string.
///
/// A zero fractional part is dropped entirely. Otherwise the fraction is
/// left-padded to `decimals` digits and trailing zeros are stripped.
///
/// # Example
/// ```
/// use loanterms_core::format_amount;
/// use num_bigint::BigUint;
///
/// assert_eq!(format_amount(&BigUint::from(1_500_000u32), 6), "1.5");
/// assert_eq!(format_amount(&BigUint::from(10u32).pow(18), 18), "1");
/// ```
pub fn format_amount(amount: &BigUint, decimals: u32) -> String {
    let divisor = scale(decimals);
    let integer = amount / &divisor;
    let fraction = amount % &divisor;

    if fraction.is_zero() {
        return integer.to_string();
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{}.{}", integer, padded.trim_end_matches('0'))
}

/// Parse a decimal string into a fixed-point amount.
///
/// A missing integer or fractional part counts as zero. Fraction digits
/// beyond `decimals` are truncated, never rounded.
pub fn parse_amount(input: &str, decimals: u32) -> Result<BigUint, AmountError> {
    let mut parts = input.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if parts.next().is_some() {
        return Err(AmountError::MultipleDecimalPoints(input.to_string()));
    }

    if !is_digits(integer) || !is_digits(fraction) {
        return Err(AmountError::InvalidNumber(input.to_string()));
    }

    // Digits are ASCII, so byte slicing stays on char boundaries
    let width = decimals as usize;
    let fraction = &fraction[..fraction.len().min(width)];
    let fraction = format!("{:0<width$}", fraction, width = width);

    Ok(digits_to_uint(integer) * scale(decimals) + digits_to_uint(&fraction))
}

/// Parse a plain unsigned integer string (no decimal point).
pub fn parse_integer(input: &str) -> Result<BigUint, AmountError> {
    if input.is_empty() || !is_digits(input) {
        return Err(AmountError::InvalidNumber(input.to_string()));
    }
    Ok(digits_to_uint(input))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn digits_to_uint(digits: &str) -> BigUint {
    // Empty means zero; non-empty input was already checked to be all digits
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

/// Serde helper that (de)serializes a `BigUint` as a decimal string.
///
/// JSON numbers lose precision past 2^53, so amounts travel as strings.
///
/// ```ignore
/// #[serde(with = "loanterms_core::amount::decimal_str")]
/// pub loan_value_usd: BigUint,
/// ```
pub mod decimal_str {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_integer(&raw).map_err(serde::de::Error::custom)
    }
}
