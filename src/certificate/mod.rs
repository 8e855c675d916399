//! Certificate handling module
//!
//! This module provides functionality for:
//! - Decoding PEM and DER certificates
//! - Policy compliance evaluation
//! - Validity window explanation

pub mod compliance;
pub mod decode;
pub mod info;
pub mod validity;

pub use compliance::{evaluate, evaluate_at, CompliancePolicy, ComplianceResult};
pub use decode::{decode_certificates, decode_der, read_certificates};
pub use info::{KeyAlgorithm, ParsedCertificate, SignatureAlgorithm};
pub use validity::{explain_validity, validity_status_at, ValidityStatus};
