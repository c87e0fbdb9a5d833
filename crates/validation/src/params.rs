//! Inputs assembled by the UI right before submitting a loan or offer

use loanterms_core::amount::decimal_str;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::result::ValidationResult;
use crate::rules::{
    validate_collateral_ratio, validate_interest_rate, validate_loan_duration,
    validate_supplier_eligibility,
};

/// Proposed loan terms plus the protocol limits they must respect
///
/// Amounts travel as decimal strings in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCreationParams {
    #[serde(rename = "collateralValueUSD", with = "decimal_str")]
    pub collateral_value_usd: BigUint,

    #[serde(rename = "loanValueUSD", with = "decimal_str")]
    pub loan_value_usd: BigUint,

    /// Basis points
    #[serde(with = "decimal_str")]
    pub interest_rate: BigUint,

    #[serde(with = "decimal_str")]
    pub duration: BigUint,

    /// Whole percent (150 = 150%)
    #[serde(with = "decimal_str")]
    pub min_collateral_ratio: BigUint,

    #[serde(with = "decimal_str")]
    pub max_interest_rate: BigUint,

    #[serde(with = "decimal_str")]
    pub min_duration: BigUint,

    #[serde(with = "decimal_str")]
    pub max_duration: BigUint,
}

/// Snapshot of a supplier's on-chain standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierEligibility {
    pub is_verified: bool,
    pub is_active: bool,
    pub has_minimum_stake: bool,
}

impl SupplierEligibility {
    pub fn validate(&self) -> ValidationResult {
        validate_supplier_eligibility(self.is_verified, self.is_active, self.has_minimum_stake)
    }
}

/// Run the loan creation checks in order, stopping at the first failure:
/// interest rate, duration, collateral ratio.
pub fn validate_loan_creation(params: &LoanCreationParams) -> ValidationResult {
    check_loan_creation(params).into()
}

fn check_loan_creation(params: &LoanCreationParams) -> Result<(), ValidationError> {
    validate_interest_rate(&params.interest_rate, &params.max_interest_rate).into_result()?;
    validate_loan_duration(&params.duration, &params.min_duration, &params.max_duration)
        .into_result()?;
    validate_collateral_ratio(
        &params.collateral_value_usd,
        &params.loan_value_usd,
        &params.min_collateral_ratio,
    )
    .into_result()
}
