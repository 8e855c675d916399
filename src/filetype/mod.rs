//! File type detection by content
//!
//! Classifies the leading bytes of a file into one of a fixed set of
//! cryptographic artifact formats by magic-number matching. The file's
//! name plays no part in the decision.

pub mod sample;
pub mod signature;

pub use sample::{ByteSample, SAMPLE_SIZE};

use serde::Serialize;
use std::fmt;

/// Number of leading bytes scanned for the PEM label
const PEM_LABEL_WINDOW: usize = 100;

/// Object type named in a PEM armor header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PemKind {
    Certificate,
    PrivateKey,
    PublicKey,
    CertificateRequest,
}

impl fmt::Display for PemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PemKind::Certificate => write!(f, "Certificate"),
            PemKind::PrivateKey => write!(f, "Private Key"),
            PemKind::PublicKey => write!(f, "Public Key"),
            PemKind::CertificateRequest => write!(f, "Certificate Signing Request"),
        }
    }
}

/// Object type guessed from the first bytes of a DER structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DerKind {
    Certificate,
    PrivateKey,
    PublicKey,
    Unknown,
}

impl fmt::Display for DerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerKind::Certificate => write!(f, "Certificate"),
            DerKind::PrivateKey => write!(f, "Private Key"),
            DerKind::PublicKey => write!(f, "Public Key"),
            DerKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Detected file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileFormat {
    JavaKeyStore,
    JceKeyStore,
    Pem(PemKind),
    Der(DerKind),
    Pkcs12,
    WindowsExecutable,
    LinuxExecutable,
    Text,
    Unknown,
}

impl FileFormat {
    /// Canonical extension, empty when there isn't one
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::JavaKeyStore => ".jks",
            FileFormat::JceKeyStore => ".jceks",
            FileFormat::Pem(_) => ".pem",
            FileFormat::Der(_) => ".der",
            FileFormat::Pkcs12 => ".p12",
            FileFormat::WindowsExecutable => ".exe",
            FileFormat::LinuxExecutable => "",
            FileFormat::Text => ".txt",
            FileFormat::Unknown => "",
        }
    }

    /// MIME-like content type
    pub fn content_type(&self) -> &'static str {
        match self {
            FileFormat::JavaKeyStore | FileFormat::JceKeyStore => "application/x-java-keystore",
            FileFormat::Pem(_) => "application/x-pem-file",
            FileFormat::Der(_) => "application/x-x509-ca-cert",
            FileFormat::Pkcs12 => "application/x-pkcs12",
            FileFormat::WindowsExecutable => "application/x-msdownload",
            FileFormat::LinuxExecutable => "application/x-executable",
            FileFormat::Text => "text/plain",
            FileFormat::Unknown => "application/octet-stream",
        }
    }

    pub fn description(&self) -> String {
        match self {
            FileFormat::JavaKeyStore => "Java KeyStore (JKS)".to_string(),
            FileFormat::JceKeyStore => {
                "Java Cryptography Extension KeyStore (JCEKS)".to_string()
            }
            FileFormat::Pem(kind) => format!("PEM Encoded {}", kind),
            FileFormat::Der(kind) => format!("DER Encoded {}", kind),
            FileFormat::Pkcs12 => "PKCS#12 / PFX Certificate Store".to_string(),
            FileFormat::WindowsExecutable => "Windows Executable".to_string(),
            FileFormat::LinuxExecutable => "Linux Executable".to_string(),
            FileFormat::Text => "Text File".to_string(),
            FileFormat::Unknown => "Unknown File Type".to_string(),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of classifying one byte sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatClassification {
    pub format: FileFormat,
    pub extension: String,
    pub content_type: String,
    pub description: String,
}

impl From<FileFormat> for FormatClassification {
    fn from(format: FileFormat) -> Self {
        Self {
            format,
            extension: format.extension().to_string(),
            content_type: format.content_type().to_string(),
            description: format.description(),
        }
    }
}

/// Classify a byte sample
///
/// Never fails: anything unrecognized is "Unknown File Type".
pub fn classify(sample: &ByteSample) -> FormatClassification {
    detect_format(sample.as_bytes()).into()
}

/// Signature tests in priority order; the first match wins.
fn detect_format(data: &[u8]) -> FileFormat {
    use signature::*;

    match leading_be_u32(data) {
        Some(JKS_MAGIC) => return FileFormat::JavaKeyStore,
        Some(JCEKS_MAGIC) => return FileFormat::JceKeyStore,
        _ => {}
    }

    if data.starts_with(PEM_HEADER) {
        return FileFormat::Pem(pem_kind(data));
    }

    if data.len() >= 2 && data[0] == ASN1_SEQUENCE {
        return FileFormat::Der(der_kind(data));
    }

    // Shadowed by the DER test above for every input it could match.
    if is_pkcs12(data) {
        return FileFormat::Pkcs12;
    }

    if data.starts_with(MZ_HEADER) {
        return FileFormat::WindowsExecutable;
    }

    if data.starts_with(ELF_HEADER) {
        return FileFormat::LinuxExecutable;
    }

    if is_text(data) {
        return FileFormat::Text;
    }

    FileFormat::Unknown
}

fn pem_kind(data: &[u8]) -> PemKind {
    use signature::window_contains;

    let label = |needle: &str| window_contains(data, PEM_LABEL_WINDOW, needle.as_bytes());

    if label("CERTIFICATE") {
        PemKind::Certificate
    } else if label("PRIVATE KEY") {
        PemKind::PrivateKey
    } else if label("PUBLIC KEY") {
        PemKind::PublicKey
    } else if label("CSR") || label("CERTIFICATE REQUEST") {
        PemKind::CertificateRequest
    } else {
        PemKind::Certificate
    }
}

/// Probes run in sequence and a later match overrides an earlier one, so a
/// sample carrying both the X.500 and the INTEGER 0 patterns is reported as
/// a private key.
fn der_kind(data: &[u8]) -> DerKind {
    use signature::*;

    let length_byte = byte_at(data, 1).unwrap_or(0);
    let mut kind = DerKind::Unknown;

    if data.len() > 15
        && (length_byte == 0x82 || length_byte >= 0x80)
        && window_contains(data, 15, X500_ATTRIBUTE_OID)
    {
        kind = DerKind::Certificate;
    }

    if data.len() > 10 && length_byte >= 0x80 && window_contains(data, 10, INTEGER_ZERO) {
        kind = DerKind::PrivateKey;
    }

    if data.len() > 15 && window_contains(data, 15, RSA_OID_PREFIX) {
        kind = DerKind::PublicKey;
    }

    kind
}

fn is_pkcs12(data: &[u8]) -> bool {
    use signature::*;

    data.len() >= 4
        && data[0] == ASN1_SEQUENCE
        && data[1] >= 0x80
        && window_contains(data, 10, PKCS12_OID)
}

/// At least 90% printable bytes; an empty sample is not text.
fn is_text(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }
    let printable = data.iter().filter(|&&b| signature::is_text_byte(b)).count();
    printable * 10 >= data.len() * 9
}
