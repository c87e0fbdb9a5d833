//! Loanterms Config - Validator defaults
//!
//! Protocol-facing defaults (minimum health factor, accepted fiat currencies,
//! token decimals) live here instead of at call sites, so they can be tuned
//! from a TOML file and swapped without blocking readers.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, MAX_DECIMALS};
pub use types::{
    ValidatorConfig, DEFAULT_AMOUNT_FIELD_NAME, DEFAULT_MIN_HEALTH_FACTOR,
    DEFAULT_SUPPORTED_CURRENCIES,
};
