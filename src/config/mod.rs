//! Configuration module for cert-finder
//!
//! Handles loading the compliance policy from TOML files.

pub mod settings;

pub use settings::{Settings, DEFAULT_CONFIG_PATH};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit file, or from the default location
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
