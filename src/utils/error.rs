//! Custom error types for cert-finder
//!
//! The analyzers themselves never fail; these errors come from the
//! collaborators around them: reading files, decoding certificates and
//! loading configuration.

use thiserror::Error;

/// Top-level error type for cert-finder
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Certificate reading and decoding errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to read {path}: {message}")]
    FileReadError { path: String, message: String },

    #[error("Failed to parse PEM: {message}")]
    PemError { message: String },

    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("No CERTIFICATE blocks found in PEM data")]
    NoCertificate,

    #[error("Invalid timestamp in certificate: {field}")]
    InvalidTimestamp { field: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using FinderError
pub type Result<T> = std::result::Result<T, FinderError>;
