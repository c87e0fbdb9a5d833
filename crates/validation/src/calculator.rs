//! Derived loan figures shown before a transaction is submitted
//!
//! All arithmetic is on `BigUint`, so intermediate products such as
//! `principal * rate * duration` never overflow. Every division truncates.

use num_bigint::BigUint;
use num_traits::Zero;

/// Days per year used for accrual
pub const DAYS_PER_YEAR: u32 = 365;

/// Accrued rate over `duration` days: `floor(annual_rate * duration / 365)`.
///
/// Unit follows `annual_rate` (basis points in, basis points out).
pub fn validate_apy(annual_rate: &BigUint, duration: &BigUint) -> BigUint {
    annual_rate * duration / DAYS_PER_YEAR
}

/// Simple interest on `principal` for `duration` days.
///
/// `annual_rate` is a whole percentage here (10 = 10%), not basis points.
pub fn calculate_interest(principal: &BigUint, annual_rate: &BigUint, duration: &BigUint) -> BigUint {
    principal * annual_rate * duration / (DAYS_PER_YEAR * 100)
}

/// Principal plus simple interest, see [`calculate_interest`]
pub fn calculate_repayment_with_interest(
    principal: &BigUint,
    annual_rate: &BigUint,
    duration: &BigUint,
) -> BigUint {
    principal + calculate_interest(principal, annual_rate, duration)
}

/// Collateral as a percentage of the loan: `floor(collateral * 100 / loan)`.
///
/// Returns `None` for a zero loan.
pub fn collateral_ratio(collateral_value: &BigUint, loan_value: &BigUint) -> Option<BigUint> {
    if loan_value.is_zero() {
        return None;
    }
    Some(collateral_value * 100u32 / loan_value)
}

/// Loan as a percentage of collateral: `floor(100 * loan / collateral)`.
///
/// Not derived from [`collateral_ratio`]; both truncate independently.
/// Returns `None` for zero collateral.
pub fn loan_to_value(loan_value: &BigUint, collateral_value: &BigUint) -> Option<BigUint> {
    if collateral_value.is_zero() {
        return None;
    }
    Some(loan_value * 100u32 / collateral_value)
}

/// Collateral needed for `loan_value` at a whole-percent ratio (150 = 150%)
pub fn required_collateral(loan_value: &BigUint, min_collateral_ratio: &BigUint) -> BigUint {
    loan_value * min_collateral_ratio / 100u32
}

/// Render a health factor stored in tenths with two decimals (14 -> "1.40")
pub fn format_health_factor(health_factor: &BigUint) -> String {
    format!("{}.{}0", health_factor / 10u32, health_factor % 10u32)
}
