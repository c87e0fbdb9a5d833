//! Configuration types

use loanterms_core::DEFAULT_DECIMALS;
use serde::{Deserialize, Serialize};

/// Minimum health factor, in tenths (15 = 1.5x)
pub const DEFAULT_MIN_HEALTH_FACTOR: u64 = 15;

/// Fiat currencies accepted for USD-denominated offers
pub const DEFAULT_SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Label used in the non-positive amount message when the caller gives none
pub const DEFAULT_AMOUNT_FIELD_NAME: &str = "Amount";

/// Overridable defaults for the loan terms validator
///
/// Every field has a serde default, so an empty TOML document yields
/// [`ValidatorConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Minimum health factor in tenths
    #[serde(default = "default_min_health_factor")]
    pub min_health_factor: u64,

    /// Accepted fiat currency codes, in display order
    #[serde(default = "default_supported_currencies")]
    pub supported_currencies: Vec<String>,

    /// Field label for amount checks
    #[serde(default = "default_amount_field_name")]
    pub amount_field_name: String,

    /// Token decimals used when formatting and parsing amounts
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_min_health_factor() -> u64 {
    DEFAULT_MIN_HEALTH_FACTOR
}

fn default_supported_currencies() -> Vec<String> {
    DEFAULT_SUPPORTED_CURRENCIES
        .iter()
        .map(|code| code.to_string())
        .collect()
}

fn default_amount_field_name() -> String {
    DEFAULT_AMOUNT_FIELD_NAME.to_string()
}

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_health_factor: default_min_health_factor(),
            supported_currencies: default_supported_currencies(),
            amount_field_name: default_amount_field_name(),
            decimals: default_decimals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ValidatorConfig = toml::from_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.min_health_factor, 15);
        assert_eq!(config.supported_currencies, vec!["USD", "EUR", "GBP"]);
        assert_eq!(config.decimals, 18);
    }

    #[test]
    fn test_partial_override() {
        let config: ValidatorConfig = toml::from_str("decimals = 6").unwrap();
        assert_eq!(config.decimals, 6);
        assert_eq!(config.amount_field_name, "Amount");
    }
}
