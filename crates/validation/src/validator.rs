//! Config-backed entry point for UI call sites
//!
//! Call sites hold a [`LoanTermsValidator`] instead of repeating defaults
//! such as the minimum health factor or the accepted fiat currencies.

use std::sync::Arc;

use loanterms_config::{ConfigLoader, ValidatorConfig};
use loanterms_core::{format_amount, parse_amount, AmountError};
use num_bigint::BigUint;

use crate::params::{LoanCreationParams, SupplierEligibility};
use crate::result::ValidationResult;
use crate::rules;

/// Loan terms validator bound to one configuration snapshot
#[derive(Debug, Clone)]
pub struct LoanTermsValidator {
    config: Arc<ValidatorConfig>,
}

impl LoanTermsValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Snapshot the loader's current configuration
    pub fn from_loader(loader: &ConfigLoader) -> Self {
        Self {
            config: loader.get(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate_interest_rate(&self, rate: &BigUint, max_rate: &BigUint) -> ValidationResult {
        self.traced("interest_rate", rules::validate_interest_rate(rate, max_rate))
    }

    pub fn validate_loan_duration(
        &self,
        duration: &BigUint,
        min_duration: &BigUint,
        max_duration: &BigUint,
    ) -> ValidationResult {
        self.traced(
            "loan_duration",
            rules::validate_loan_duration(duration, min_duration, max_duration),
        )
    }

    pub fn validate_collateral_ratio(
        &self,
        collateral_value_usd: &BigUint,
        loan_value_usd: &BigUint,
        min_ratio: &BigUint,
    ) -> ValidationResult {
        self.traced(
            "collateral_ratio",
            rules::validate_collateral_ratio(collateral_value_usd, loan_value_usd, min_ratio),
        )
    }

    pub fn validate_sufficient_collateral(
        &self,
        collateral_value_usd: &BigUint,
        loan_value_usd: &BigUint,
        min_collateral_ratio: &BigUint,
    ) -> ValidationResult {
        self.traced(
            "sufficient_collateral",
            rules::validate_sufficient_collateral(
                collateral_value_usd,
                loan_value_usd,
                min_collateral_ratio,
            ),
        )
    }

    pub fn validate_supplier_stake(
        &self,
        supplier_stake: &BigUint,
        minimum_stake: &BigUint,
    ) -> ValidationResult {
        self.traced(
            "supplier_stake",
            rules::validate_supplier_stake(supplier_stake, minimum_stake),
        )
    }

    pub fn validate_supplier_eligibility(&self, supplier: &SupplierEligibility) -> ValidationResult {
        self.traced("supplier_eligibility", supplier.validate())
    }

    /// Check against the configured minimum health factor
    pub fn validate_health_factor(&self, health_factor: &BigUint) -> ValidationResult {
        let minimum = BigUint::from(self.config.min_health_factor);
        self.traced(
            "health_factor",
            rules::validate_health_factor(health_factor, &minimum),
        )
    }

    /// Check with the configured field label
    pub fn validate_positive_amount(&self, amount: &BigUint) -> ValidationResult {
        self.validate_positive_amount_as(amount, &self.config.amount_field_name)
    }

    pub fn validate_positive_amount_as(&self, amount: &BigUint, field_name: &str) -> ValidationResult {
        self.traced(
            "positive_amount",
            rules::validate_positive_amount(amount, field_name),
        )
    }

    /// Check against the configured currency list
    pub fn validate_fiat_currency(&self, currency: &str) -> ValidationResult {
        self.traced(
            "fiat_currency",
            rules::validate_fiat_currency(currency, self.config.supported_currencies.as_slice()),
        )
    }

    pub fn validate_ethereum_address(&self, address: &str) -> ValidationResult {
        self.traced("ethereum_address", rules::validate_ethereum_address(address))
    }

    pub fn validate_loan_creation(&self, params: &LoanCreationParams) -> ValidationResult {
        self.traced(
            "loan_creation",
            crate::params::validate_loan_creation(params),
        )
    }

    /// Format with the configured token decimals
    pub fn format_amount(&self, amount: &BigUint) -> String {
        format_amount(amount, self.config.decimals)
    }

    /// Parse with the configured token decimals
    pub fn parse_amount(&self, input: &str) -> Result<BigUint, AmountError> {
        parse_amount(input, self.config.decimals)
    }

    fn traced(&self, check: &'static str, result: ValidationResult) -> ValidationResult {
        if let Some(error) = result.error() {
            tracing::debug!(check, code = %error.code(), reason = %error, "Validation rejected");
        }
        result
    }
}

impl Default for LoanTermsValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}
