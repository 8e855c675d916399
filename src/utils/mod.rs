//! Utility modules for cert-finder
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{CertificateError, ConfigError, FinderError, Result};
