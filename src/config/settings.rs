//! Application settings configuration
//!
//! Holds the compliance policy certificates are checked against.

use crate::certificate::CompliancePolicy;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default settings file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub policy: CompliancePolicy,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_PATH);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            debug!("no {} found, using built-in policy", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let settings = Self::from_toml(&content)?;
        debug!(path = %path.display(), policy = %settings.policy.name, "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.allowed_signature_algorithms.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "policy.allowed_signature_algorithms".to_string(),
                message: "at least one algorithm must be allowed".to_string(),
            });
        }
        if self.policy.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "policy.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
