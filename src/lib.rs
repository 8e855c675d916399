//! cert-finder library
//!
//! Two independent analyzers for candidate cryptographic artifacts:
//! - File type detection from a file's leading bytes (keystores, PEM, DER,
//!   PKCS#12, executables, text)
//! - Compliance evaluation of X.509 certificates against a FIPS 140-3 style
//!   policy, plus a validity window explanation
//!
//! Both analyzers are pure functions over data handed to them. Reading files
//! and decoding certificates are done by the surrounding collaborators.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cert_finder::certificate::{decode_certificates, evaluate, explain_validity, CompliancePolicy};
//! use cert_finder::filetype::{classify, ByteSample};
//!
//! let data = std::fs::read("server.pem")?;
//! println!("{}", classify(&ByteSample::new(&data)).description);
//!
//! for cert in decode_certificates(&data)? {
//!     let result = evaluate(&cert, &CompliancePolicy::fips_140_3());
//!     println!("{:?} {}", result.reasons, explain_validity(&cert));
//! }
//! ```

pub mod certificate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filetype;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use certificate::{
    evaluate, explain_validity, CompliancePolicy, ComplianceResult, KeyAlgorithm,
    ParsedCertificate, SignatureAlgorithm,
};
pub use cli::Cli;
pub use config::Settings;
pub use filetype::{classify, ByteSample, FileFormat, FormatClassification};
pub use utils::{FinderError, Result};
