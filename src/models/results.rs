//! Per-file results produced by the commands

use crate::certificate::{ComplianceResult, ParsedCertificate, ValidityStatus};
use crate::filetype::FormatClassification;
use serde::Serialize;
use std::path::Path;

/// Classification of one file, or why it could not be read
#[derive(Debug, Clone, Serialize)]
pub struct FileIdentification {
    pub path: String,
    #[serde(flatten)]
    pub classification: Option<FormatClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileIdentification {
    pub fn new(path: &Path, classification: FormatClassification) -> Self {
        Self {
            path: path.display().to_string(),
            classification: Some(classification),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            classification: None,
            error: Some(error),
        }
    }
}

/// Compliance verdict and validity for one certificate, or the load failure
/// for the file it should have come from
#[derive(Debug, Clone, Serialize)]
pub struct CertificateCheck {
    /// File path, suffixed with `[n]` when the file holds several certificates
    pub label: String,
    pub policy: String,
    #[serde(flatten)]
    pub report: Option<CertificateReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateReport {
    pub certificate: ParsedCertificate,
    pub compliance: ComplianceResult,
    pub validity: ValidityStatus,
    pub validity_message: String,
}

impl CertificateCheck {
    pub fn failed(label: String, policy: &str, error: String) -> Self {
        Self {
            label,
            policy: policy.to_string(),
            report: None,
            error: Some(error),
        }
    }
}
