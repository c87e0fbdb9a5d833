//! Configuration loader with hot reload support

use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::types::ValidatorConfig;

/// Longest currency code accepted in `supported_currencies`
const MAX_CURRENCY_CODE_LEN: usize = 10;

/// Largest token decimals accepted; `10^77` is the biggest power of ten in a uint256
pub const MAX_DECIMALS: u32 = 77;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Holds the active [`ValidatorConfig`]; readers never block a reload
pub struct ConfigLoader {
    config: ArcSwap<ValidatorConfig>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create loader with default configuration
    pub fn new() -> Self {
        Self {
            config: ArcSwap::from_pointee(ValidatorConfig::default()),
            config_path: None,
        }
    }

    /// Load configuration from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let config = Self::read(path)?;

        Ok(Self {
            config: ArcSwap::from_pointee(config),
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from a TOML string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(content)?;

        Ok(Self {
            config: ArcSwap::from_pointee(config),
            config_path: None,
        })
    }

    /// Get current configuration
    #[inline]
    pub fn get(&self) -> Arc<ValidatorConfig> {
        self.config.load_full()
    }

    /// Re-read the file this loader was created from.
    ///
    /// On failure the previous configuration stays active.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("no config file path set".to_string()))?;

        let new_config = Self::read(path)?;
        self.config.store(Arc::new(new_config));

        tracing::info!(path = %path.display(), "Validator configuration reloaded");
        Ok(())
    }

    /// Replace the configuration programmatically
    pub fn update(&self, new_config: ValidatorConfig) -> Result<(), ConfigError> {
        let new_config = Self::normalize(new_config)?;
        self.config.store(Arc::new(new_config));
        Ok(())
    }

    fn read(path: &Path) -> Result<ValidatorConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "Rejected validator configuration");
        })
    }

    fn parse(content: &str) -> Result<ValidatorConfig, ConfigError> {
        let config: ValidatorConfig = toml::from_str(content)?;
        Self::normalize(config)
    }

    /// Validate, then store currency codes trimmed and uppercased
    fn normalize(mut config: ValidatorConfig) -> Result<ValidatorConfig, ConfigError> {
        Self::validate(&config)?;

        for code in &mut config.supported_currencies {
            *code = code.trim().to_uppercase();
        }
        Ok(config)
    }

    fn validate(config: &ValidatorConfig) -> Result<(), ConfigError> {
        if config.supported_currencies.is_empty() {
            return Err(ConfigError::Validation(
                "supported_currencies must not be empty".to_string(),
            ));
        }

        for code in &config.supported_currencies {
            let code = code.trim();
            if code.is_empty() {
                return Err(ConfigError::Validation("empty currency code".to_string()));
            }
            if code.len() > MAX_CURRENCY_CODE_LEN {
                return Err(ConfigError::Validation(format!(
                    "currency code too long (max {} chars): {}",
                    MAX_CURRENCY_CODE_LEN, code
                )));
            }
            if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::Validation(format!(
                    "invalid currency code format: {}",
                    code
                )));
            }
        }

        if config.decimals > MAX_DECIMALS {
            return Err(ConfigError::Validation(format!(
                "decimals too large (max {}): {}",
                MAX_DECIMALS, config.decimals
            )));
        }

        if config.amount_field_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "amount_field_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
