//! Loanterms Validation - Pre-submit loan terms checks
//!
//! Validates proposed loan and offer parameters against protocol limits and
//! computes the figures shown to a user before a transaction is sent to the
//! lending contracts. The contracts stay authoritative; these checks only gate
//! the submit button and explain why.
//!
//! Every function is pure. Broken business rules come back as a
//! [`ValidationResult`]; malformed numeric input is an [`AmountError`].
//!
//! # Example
//! ```
//! use loanterms_validation::{validate_collateral_ratio, ValidationCode};
//! use num_bigint::BigUint;
//!
//! let result = validate_collateral_ratio(
//!     &BigUint::from(100u32),
//!     &BigUint::from(100u32),
//!     &BigUint::from(150u32),
//! );
//! assert!(!result.is_valid());
//! assert_eq!(result.code(), Some(ValidationCode::InsufficientCollateral));
//! ```

pub mod calculator;
pub mod error;
pub mod params;
pub mod result;
pub mod rules;
pub mod validator;

pub use calculator::{
    calculate_interest, calculate_repayment_with_interest, collateral_ratio,
    format_health_factor, loan_to_value, required_collateral, validate_apy,
};
pub use error::{ValidationCode, ValidationError};
pub use loanterms_core::{format_amount, parse_amount, AmountError, DEFAULT_DECIMALS};
pub use params::{validate_loan_creation, LoanCreationParams, SupplierEligibility};
pub use result::ValidationResult;
pub use rules::{
    validate_collateral_ratio, validate_ethereum_address, validate_fiat_currency,
    validate_health_factor, validate_interest_rate, validate_loan_duration,
    validate_positive_amount, validate_sufficient_collateral, validate_supplier_eligibility,
    validate_supplier_stake,
};
pub use validator::LoanTermsValidator;
