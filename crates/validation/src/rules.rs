//! Loan terms rules
//!
//! Each rule is a pure function over already-resolved values. A broken rule
//! is reported through [`ValidationResult`], never through a panic or `Err`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::calculator::{collateral_ratio, loan_to_value, required_collateral};
use crate::error::ValidationError;
use crate::result::ValidationResult;

/// Length of an address body after the `0x` prefix
const ADDRESS_HEX_LEN: usize = 40;

/// Rate must be in `(0, max_rate]`. The upper bound is checked first.
pub fn validate_interest_rate(rate: &BigUint, max_rate: &BigUint) -> ValidationResult {
    if rate > max_rate {
        return ValidationError::RateTooHigh {
            max_rate: max_rate.clone(),
        }
        .into();
    }
    if rate.is_zero() {
        return ValidationError::RateNotPositive.into();
    }
    ValidationResult::ok()
}

/// Duration must be in `[min_duration, max_duration]`.
///
/// Only raw integers are compared; the caller keeps units consistent.
pub fn validate_loan_duration(
    duration: &BigUint,
    min_duration: &BigUint,
    max_duration: &BigUint,
) -> ValidationResult {
    if duration < min_duration {
        return ValidationError::DurationTooShort {
            minimum: min_duration.clone(),
        }
        .into();
    }
    if duration > max_duration {
        return ValidationError::DurationTooLong {
            maximum: max_duration.clone(),
        }
        .into();
    }
    ValidationResult::ok()
}

/// Collateral must be worth at least `min_ratio` percent of the loan
pub fn validate_collateral_ratio(
    collateral_value_usd: &BigUint,
    loan_value_usd: &BigUint,
    min_ratio: &BigUint,
) -> ValidationResult {
    if collateral_value_usd.is_zero() {
        return ValidationError::ZeroCollateral.into();
    }
    let Some(ratio) = collateral_ratio(collateral_value_usd, loan_value_usd) else {
        return ValidationError::ZeroLoanValue.into();
    };

    if &ratio < min_ratio {
        let ltv = loan_to_value(loan_value_usd, collateral_value_usd).unwrap_or_default();
        return ValidationError::CollateralRatioTooLow {
            ratio,
            minimum: min_ratio.clone(),
            ltv,
        }
        .into();
    }
    ValidationResult::ok()
}

/// Health factor (tenths) must be at least `min_health_factor`
pub fn validate_health_factor(
    health_factor: &BigUint,
    min_health_factor: &BigUint,
) -> ValidationResult {
    if health_factor < min_health_factor {
        return ValidationError::HealthFactorTooLow {
            health_factor: health_factor.clone(),
            minimum: min_health_factor.clone(),
        }
        .into();
    }
    ValidationResult::ok()
}

/// Amount must be strictly positive; `field_name` labels the message
pub fn validate_positive_amount(amount: &BigUint, field_name: &str) -> ValidationResult {
    if amount.is_zero() {
        return ValidationError::NonPositiveAmount {
            field: field_name.to_string(),
        }
        .into();
    }
    ValidationResult::ok()
}

/// `0x` followed by exactly 40 hex digits, either case. No EIP-55 checksum.
pub fn validate_ethereum_address(address: &str) -> ValidationResult {
    let well_formed = address
        .strip_prefix("0x")
        .is_some_and(|body| body.len() == ADDRESS_HEX_LEN && hex::decode(body).is_ok());

    if !well_formed {
        return ValidationError::MalformedAddress.into();
    }
    ValidationResult::ok()
}

/// Collateral must cover `floor(loan * min_collateral_ratio / 100)`.
///
/// Only zero collateral is guarded; a zero loan needs zero collateral and passes.
pub fn validate_sufficient_collateral(
    collateral_value_usd: &BigUint,
    loan_value_usd: &BigUint,
    min_collateral_ratio: &BigUint,
) -> ValidationResult {
    if collateral_value_usd.is_zero() {
        return ValidationError::ZeroCollateral.into();
    }

    let required = required_collateral(loan_value_usd, min_collateral_ratio);
    if collateral_value_usd < &required {
        return ValidationError::InsufficientCollateral {
            required,
            available: collateral_value_usd.clone(),
        }
        .into();
    }
    ValidationResult::ok()
}

/// Supplier stake must be at least `minimum_stake`
pub fn validate_supplier_stake(supplier_stake: &BigUint, minimum_stake: &BigUint) -> ValidationResult {
    if supplier_stake < minimum_stake {
        return ValidationError::StakeBelowMinimum {
            stake: supplier_stake.clone(),
            minimum: minimum_stake.clone(),
        }
        .into();
    }
    ValidationResult::ok()
}

/// First failing flag wins: verified, then active, then stake
pub fn validate_supplier_eligibility(
    is_verified: bool,
    is_active: bool,
    has_minimum_stake: bool,
) -> ValidationResult {
    if !is_verified {
        return ValidationError::NotVerified.into();
    }
    if !is_active {
        return ValidationError::NotActive.into();
    }
    if !has_minimum_stake {
        return ValidationError::StakeInsufficient.into();
    }
    ValidationResult::ok()
}

/// Case-insensitive membership in `supported_currencies`
pub fn validate_fiat_currency<S: AsRef<str>>(
    currency: &str,
    supported_currencies: &[S],
) -> ValidationResult {
    let supported = supported_currencies
        .iter()
        .any(|code| code.as_ref().eq_ignore_ascii_case(currency));

    if !supported {
        return ValidationError::UnsupportedCurrency {
            currency: currency.to_string(),
            supported: supported_currencies
                .iter()
                .map(|code| code.as_ref().to_string())
                .collect(),
        }
        .into();
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationCode;

    fn uint(val: u64) -> BigUint {
        BigUint::from(val)
    }

    #[test]
    fn test_interest_rate_within_bounds() {
        assert!(validate_interest_rate(&uint(1), &uint(50_000)).is_valid());
        assert!(validate_interest_rate(&uint(50_000), &uint(50_000)).is_valid());
    }

    #[test]
    fn test_interest_rate_too_high() {
        let result = validate_interest_rate(&uint(50_001), &uint(50_000));
        assert_eq!(result.code(), Some(ValidationCode::RateTooHigh));
        assert_eq!(
            result.message().as_deref(),
            Some("Interest rate cannot exceed 500%")
        );
    }

    #[test]
    fn test_interest_rate_zero() {
        let result = validate_interest_rate(&uint(0), &uint(100));
        assert_eq!(result.code(), Some(ValidationCode::RateNotPositive));
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        let (min, max) = (uint(7), uint(365));
        assert!(validate_loan_duration(&uint(7), &min, &max).is_valid());
        assert!(validate_loan_duration(&uint(365), &min, &max).is_valid());

        let short = validate_loan_duration(&uint(6), &min, &max);
        assert_eq!(short.code(), Some(ValidationCode::DurationTooShort));
        assert_eq!(
            short.message().as_deref(),
            Some("Loan duration must be at least 7 days")
        );

        let long = validate_loan_duration(&uint(366), &min, &max);
        assert_eq!(long.code(), Some(ValidationCode::DurationTooLong));
        assert_eq!(
            long.message().as_deref(),
            Some("Loan duration cannot exceed 365 days")
        );
    }

    #[test]
    fn test_duration_says_days_even_for_seconds() {
        let result = validate_loan_duration(&uint(60), &uint(86_400), &uint(31_536_000));
        assert_eq!(
            result.message().as_deref(),
            Some("Loan duration must be at least 86400 days")
        );
    }

    #[test]
    fn test_collateral_ratio_sufficient() {
        assert!(validate_collateral_ratio(&uint(200), &uint(100), &uint(150)).is_valid());
        assert!(validate_collateral_ratio(&uint(150), &uint(100), &uint(150)).is_valid());
    }

    #[test]
    fn test_collateral_ratio_insufficient_reports_ltv() {
        let result = validate_collateral_ratio(&uint(100), &uint(100), &uint(150));
        assert_eq!(
            result.error(),
            Some(&ValidationError::CollateralRatioTooLow {
                ratio: uint(100),
                minimum: uint(150),
                ltv: uint(100),
            })
        );
    }

    #[test]
    fn test_collateral_ratio_and_ltv_are_not_complements() {
        // ratio floor(14900/100) = 149, ltv floor(10000/149) = 67
        let result = validate_collateral_ratio(&uint(149), &uint(100), &uint(150));
        assert_eq!(
            result.message().as_deref(),
            Some("Insufficient collateral ratio: 149% is below the minimum of 150% (LTV: 67%)")
        );
    }

    #[test]
    fn test_collateral_ratio_zero_inputs() {
        let zero_collateral = validate_collateral_ratio(&uint(0), &uint(100), &uint(150));
        assert_eq!(zero_collateral.code(), Some(ValidationCode::ZeroCollateral));

        let zero_loan = validate_collateral_ratio(&uint(100), &uint(0), &uint(150));
        assert_eq!(zero_loan.code(), Some(ValidationCode::ZeroLoanValue));

        // Collateral is checked first
        let both = validate_collateral_ratio(&uint(0), &uint(0), &uint(150));
        assert_eq!(both.code(), Some(ValidationCode::ZeroCollateral));
    }

    #[test]
    fn test_health_factor() {
        assert!(validate_health_factor(&uint(15), &uint(15)).is_valid());
        assert!(validate_health_factor(&uint(20), &uint(15)).is_valid());

        let result = validate_health_factor(&uint(14), &uint(15));
        assert_eq!(result.code(), Some(ValidationCode::HealthFactorTooLow));
        assert_eq!(
            result.message().as_deref(),
            Some("Health factor 1.40 is below the minimum of 1.50")
        );
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(&uint(1), "Amount").is_valid());

        let result = validate_positive_amount(&uint(0), "Collateral amount");
        assert_eq!(result.code(), Some(ValidationCode::NonPositiveAmount));
        assert_eq!(
            result.message().as_deref(),
            Some("Collateral amount must be greater than 0")
        );
    }

    #[test]
    fn test_ethereum_address() {
        let lower = format!("0x{}", "a".repeat(40));
        assert!(validate_ethereum_address(&lower).is_valid());
        assert!(validate_ethereum_address("0xABCDEF0123456789abcdef0123456789ABCDEF01").is_valid());

        let rejected = [
            format!("0x{}", "a".repeat(39)),
            format!("0x{}", "a".repeat(41)),
            format!("0X{}", "a".repeat(40)),
            format!("0x{}g", "a".repeat(39)),
            "a".repeat(42),
            String::new(),
        ];
        for address in rejected {
            let result = validate_ethereum_address(&address);
            assert_eq!(
                result.code(),
                Some(ValidationCode::MalformedAddress),
                "{address}"
            );
        }
    }

    #[test]
    fn test_sufficient_collateral() {
        assert!(validate_sufficient_collateral(&uint(1500), &uint(1000), &uint(150)).is_valid());

        let result = validate_sufficient_collateral(&uint(1499), &uint(1000), &uint(150));
        assert_eq!(result.code(), Some(ValidationCode::InsufficientCollateral));
        assert_eq!(
            result.message().as_deref(),
            Some("Insufficient collateral. Required: 1500, Available: 1499")
        );
    }

    #[test]
    fn test_sufficient_collateral_zero_loan_passes() {
        assert!(validate_sufficient_collateral(&uint(1), &uint(0), &uint(150)).is_valid());

        let result = validate_sufficient_collateral(&uint(0), &uint(0), &uint(150));
        assert_eq!(result.code(), Some(ValidationCode::ZeroCollateral));
    }

    #[test]
    fn test_supplier_stake() {
        assert!(validate_supplier_stake(&uint(100), &uint(100)).is_valid());

        let result = validate_supplier_stake(&uint(99), &uint(100));
        assert_eq!(result.code(), Some(ValidationCode::StakeBelowMinimum));
        assert_eq!(
            result.message().as_deref(),
            Some("Supplier stake 99 is below the minimum of 100")
        );
    }

    #[test]
    fn test_supplier_eligibility_order() {
        assert!(validate_supplier_eligibility(true, true, true).is_valid());
        assert_eq!(
            validate_supplier_eligibility(false, false, false).code(),
            Some(ValidationCode::NotVerified)
        );
        assert_eq!(
            validate_supplier_eligibility(true, false, false).code(),
            Some(ValidationCode::NotActive)
        );
        assert_eq!(
            validate_supplier_eligibility(true, true, false).code(),
            Some(ValidationCode::StakeInsufficient)
        );
    }

    #[test]
    fn test_fiat_currency() {
        let supported = ["USD", "EUR", "GBP"];
        assert!(validate_fiat_currency("usd", &supported).is_valid());
        assert!(validate_fiat_currency("Eur", &supported).is_valid());

        let result = validate_fiat_currency("XYZ", &supported);
        assert_eq!(result.code(), Some(ValidationCode::UnsupportedCurrency));
        assert_eq!(
            result.message().as_deref(),
            Some("Currency XYZ is not supported. Supported currencies: USD, EUR, GBP")
        );
    }

    #[test]
    fn test_fiat_currency_custom_list() {
        let supported = vec!["JPY".to_string()];
        assert!(validate_fiat_currency("jpy", supported.as_slice()).is_valid());
        assert!(!validate_fiat_currency("USD", supported.as_slice()).is_valid());
    }
}
