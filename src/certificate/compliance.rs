//! Policy compliance evaluation for X.509 certificates
//!
//! A certificate is checked in a fixed order (signature algorithm, public
//! key, validity window) and every failed check contributes exactly one
//! reason.

use crate::certificate::info::{KeyAlgorithm, ParsedCertificate, SignatureAlgorithm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Allow-lists a certificate is scored against
///
/// DSA keys are rejected under every policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompliancePolicy {
    #[serde(default = "default_policy_name")]
    pub name: String,
    #[serde(default = "default_signature_algorithms")]
    pub allowed_signature_algorithms: BTreeSet<SignatureAlgorithm>,
    #[serde(default = "default_curves")]
    pub allowed_curves: BTreeSet<String>,
    #[serde(default = "default_min_rsa_bits")]
    pub min_rsa_bits: u32,
}

fn default_policy_name() -> String {
    "FIPS 140-3".to_string()
}

fn default_signature_algorithms() -> BTreeSet<SignatureAlgorithm> {
    BTreeSet::from([
        SignatureAlgorithm::Sha256WithRsa,
        SignatureAlgorithm::Sha384WithRsa,
        SignatureAlgorithm::Sha512WithRsa,
        SignatureAlgorithm::EcdsaWithSha256,
        SignatureAlgorithm::EcdsaWithSha384,
        SignatureAlgorithm::EcdsaWithSha512,
    ])
}

fn default_curves() -> BTreeSet<String> {
    ["P-256", "P-384", "P-521"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_min_rsa_bits() -> u32 {
    2048
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self::fips_140_3()
    }
}

impl CompliancePolicy {
    /// FIPS 140-3 style policy
    pub fn fips_140_3() -> Self {
        Self {
            name: default_policy_name(),
            allowed_signature_algorithms: default_signature_algorithms(),
            allowed_curves: default_curves(),
            min_rsa_bits: default_min_rsa_bits(),
        }
    }

    pub fn allows_signature(&self, alg: &SignatureAlgorithm) -> bool {
        self.allowed_signature_algorithms.contains(alg)
    }

    pub fn allows_key(&self, key: &KeyAlgorithm) -> bool {
        match key {
            KeyAlgorithm::Rsa(bits) => *bits >= self.min_rsa_bits,
            KeyAlgorithm::Ecdsa(curve) => self.allowed_curves.contains(curve),
            KeyAlgorithm::Dsa(_) => false,
            KeyAlgorithm::Unknown(_) => false,
        }
    }
}

/// Outcome of a compliance evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub is_compliant: bool,
    pub reasons: Vec<String>,
}

impl ComplianceResult {
    fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            is_compliant: reasons.is_empty(),
            reasons,
        }
    }
}

/// Evaluate a certificate against a policy at the current time
pub fn evaluate(cert: &ParsedCertificate, policy: &CompliancePolicy) -> ComplianceResult {
    evaluate_at(cert, policy, Utc::now())
}

/// Evaluate a certificate against a policy as of `now`
pub fn evaluate_at(
    cert: &ParsedCertificate,
    policy: &CompliancePolicy,
    now: DateTime<Utc>,
) -> ComplianceResult {
    let mut reasons = Vec::new();

    if !policy.allows_signature(&cert.signature_algorithm) {
        reasons.push(format!(
            "Signature algorithm {} is not {} compliant",
            cert.signature_algorithm, policy.name
        ));
    }

    if !policy.allows_key(&cert.public_key) {
        reasons.push(format!(
            "Public key type or size is not {} compliant",
            policy.name
        ));
    }

    if !within_validity(cert, now) {
        reasons.push("Certificate is expired or not yet valid".to_string());
    }

    ComplianceResult::from_reasons(reasons)
}

/// Strictly inside the validity window; both boundaries count as outside.
fn within_validity(cert: &ParsedCertificate, now: DateTime<Utc>) -> bool {
    now > cert.not_before && now < cert.not_after
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn cert(sig: SignatureAlgorithm, key: KeyAlgorithm) -> ParsedCertificate {
        ParsedCertificate {
            subject: "CN=test.example.com".to_string(),
            issuer: "CN=Test CA".to_string(),
            serial: "01".to_string(),
            signature_algorithm: sig,
            public_key: key,
            not_before: now() - Duration::days(30),
            not_after: now() + Duration::days(335),
        }
    }

    #[test]
    fn test_sha1_signature_single_reason() {
        let c = cert(SignatureAlgorithm::Sha1WithRsa, KeyAlgorithm::Rsa(4096));
        let result = evaluate_at(&c, &CompliancePolicy::default(), now());
        assert!(!result.is_compliant);
        assert_eq!(
            result.reasons,
            vec!["Signature algorithm SHA1-RSA is not FIPS 140-3 compliant"]
        );
    }

    #[test]
    fn test_small_rsa_key_single_reason() {
        let c = cert(SignatureAlgorithm::Sha256WithRsa, KeyAlgorithm::Rsa(1024));
        let result = evaluate_at(&c, &CompliancePolicy::default(), now());
        assert!(!result.is_compliant);
        assert_eq!(
            result.reasons,
            vec!["Public key type or size is not FIPS 140-3 compliant"]
        );
    }

    #[test]
    fn test_rsa_at_minimum_is_compliant() {
        let c = cert(SignatureAlgorithm::Sha512WithRsa, KeyAlgorithm::Rsa(2048));
        assert!(evaluate_at(&c, &CompliancePolicy::default(), now()).is_compliant);
    }

    #[test]
    fn test_ecdsa_p384_compliant() {
        let c = cert(
            SignatureAlgorithm::EcdsaWithSha384,
            KeyAlgorithm::Ecdsa("P-384".to_string()),
        );
        let result = evaluate_at(&c, &CompliancePolicy::default(), now());
        assert!(result.is_compliant);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_unapproved_curve() {
        let c = cert(
            SignatureAlgorithm::EcdsaWithSha256,
            KeyAlgorithm::Ecdsa("1.3.132.0.10".to_string()),
        );
        let result = evaluate_at(&c, &CompliancePolicy::default(), now());
        assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn test_dsa_and_unknown_keys_rejected() {
        let policy = CompliancePolicy::default();
        assert!(!policy.allows_key(&KeyAlgorithm::Dsa(3072)));
        assert!(!policy.allows_key(&KeyAlgorithm::Unknown("Ed25519".to_string())));
    }

    #[test]
    fn test_validity_boundaries_are_exclusive() {
        let c = cert(SignatureAlgorithm::Sha256WithRsa, KeyAlgorithm::Rsa(2048));
        let policy = CompliancePolicy::default();

        for instant in [c.not_before, c.not_after] {
            let result = evaluate_at(&c, &policy, instant);
            assert_eq!(
                result.reasons,
                vec!["Certificate is expired or not yet valid"]
            );
        }
    }

    #[test]
    fn test_reasons_follow_check_order() {
        let mut c = cert(SignatureAlgorithm::Md5WithRsa, KeyAlgorithm::Dsa(1024));
        c.not_after = now() - Duration::days(1);
        let result = evaluate_at(&c, &CompliancePolicy::default(), now());

        assert_eq!(result.reasons.len(), 3);
        assert!(result.reasons[0].starts_with("Signature algorithm MD5-RSA"));
        assert!(result.reasons[1].starts_with("Public key type or size"));
        assert_eq!(result.reasons[2], "Certificate is expired or not yet valid");
    }

    #[test]
    fn test_custom_policy() {
        let policy = CompliancePolicy {
            name: "Strict".to_string(),
            allowed_signature_algorithms: BTreeSet::from([SignatureAlgorithm::EcdsaWithSha384]),
            allowed_curves: BTreeSet::from(["P-384".to_string()]),
            min_rsa_bits: 3072,
        };
        let c = cert(SignatureAlgorithm::Sha256WithRsa, KeyAlgorithm::Rsa(2048));
        let result = evaluate_at(&c, &policy, now());
        assert_eq!(
            result.reasons,
            vec![
                "Signature algorithm SHA256-RSA is not Strict compliant",
                "Public key type or size is not Strict compliant",
            ]
        );
    }
}
