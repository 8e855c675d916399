//! Certificate information structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Certificate signature algorithm
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SignatureAlgorithm {
    Md5WithRsa,
    Sha1WithRsa,
    Sha256WithRsa,
    Sha384WithRsa,
    Sha512WithRsa,
    RsaPss,
    DsaWithSha1,
    DsaWithSha256,
    EcdsaWithSha1,
    EcdsaWithSha256,
    EcdsaWithSha384,
    EcdsaWithSha512,
    Ed25519,
    Ed448,
    /// Unrecognized algorithm, carrying its dotted OID
    Other(String),
}

/// Named algorithms with their display name and OID
const NAMED_ALGORITHMS: &[(SignatureAlgorithm, &str, &str)] = &[
    (SignatureAlgorithm::Md5WithRsa, "MD5-RSA", "1.2.840.113549.1.1.4"),
    (SignatureAlgorithm::Sha1WithRsa, "SHA1-RSA", "1.2.840.113549.1.1.5"),
    (SignatureAlgorithm::Sha256WithRsa, "SHA256-RSA", "1.2.840.113549.1.1.11"),
    (SignatureAlgorithm::Sha384WithRsa, "SHA384-RSA", "1.2.840.113549.1.1.12"),
    (SignatureAlgorithm::Sha512WithRsa, "SHA512-RSA", "1.2.840.113549.1.1.13"),
    (SignatureAlgorithm::RsaPss, "RSA-PSS", "1.2.840.113549.1.1.10"),
    (SignatureAlgorithm::DsaWithSha1, "DSA-SHA1", "1.2.840.10040.4.3"),
    (SignatureAlgorithm::DsaWithSha256, "DSA-SHA256", "2.16.840.1.101.3.4.3.2"),
    (SignatureAlgorithm::EcdsaWithSha1, "ECDSA-SHA1", "1.2.840.10045.4.1"),
    (SignatureAlgorithm::EcdsaWithSha256, "ECDSA-SHA256", "1.2.840.10045.4.3.2"),
    (SignatureAlgorithm::EcdsaWithSha384, "ECDSA-SHA384", "1.2.840.10045.4.3.3"),
    (SignatureAlgorithm::EcdsaWithSha512, "ECDSA-SHA512", "1.2.840.10045.4.3.4"),
    (SignatureAlgorithm::Ed25519, "Ed25519", "1.3.101.112"),
    (SignatureAlgorithm::Ed448, "Ed448", "1.3.101.113"),
];

impl SignatureAlgorithm {
    /// Map a dotted signature OID to an algorithm
    pub fn from_oid(oid: &str) -> Self {
        NAMED_ALGORITHMS
            .iter()
            .find(|(_, _, known)| *known == oid)
            .map(|(alg, _, _)| alg.clone())
            .unwrap_or_else(|| SignatureAlgorithm::Other(oid.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            SignatureAlgorithm::Other(oid) => oid,
            named => NAMED_ALGORITHMS
                .iter()
                .find(|(alg, _, _)| alg == named)
                .map(|(_, name, _)| *name)
                .unwrap_or("Unknown"),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    /// Parses display names case-insensitively, or a dotted OID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Some((alg, _, _)) = NAMED_ALGORITHMS
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(wanted))
        {
            return Ok(alg.clone());
        }

        if is_dotted_oid(wanted) {
            return Ok(Self::from_oid(wanted));
        }

        Err(format!("unknown signature algorithm '{}'", wanted))
    }
}

fn is_dotted_oid(s: &str) -> bool {
    s.contains('.')
        && s
            .split('.')
            .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()))
}

impl TryFrom<String> for SignatureAlgorithm {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SignatureAlgorithm> for String {
    fn from(alg: SignatureAlgorithm) -> Self {
        alg.name().to_string()
    }
}

/// Public key algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    Rsa(u32),      // modulus bit length
    Ecdsa(String), // curve name
    Dsa(u32),
    Unknown(String),
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa(bits) => write!(f, "RSA {} bits", bits),
            KeyAlgorithm::Ecdsa(curve) => write!(f, "ECDSA ({})", curve),
            KeyAlgorithm::Dsa(bits) => write!(f, "DSA {} bits", bits),
            KeyAlgorithm::Unknown(s) => write!(f, "Unknown ({})", s),
        }
    }
}

/// Fields of a decoded X.509 certificate that the analyzers read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCertificate {
    pub subject: String,
    pub issuer: String,
    pub serial: String,
    pub signature_algorithm: SignatureAlgorithm,
    pub public_key: KeyAlgorithm,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}
