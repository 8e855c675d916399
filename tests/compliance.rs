use cert_finder::certificate::{
    evaluate, evaluate_at, explain_validity, CompliancePolicy, KeyAlgorithm, ParsedCertificate,
    SignatureAlgorithm,
};
use chrono::{Duration, Utc};

fn currently_valid(sig: SignatureAlgorithm, key: KeyAlgorithm) -> ParsedCertificate {
    let now = Utc::now();
    ParsedCertificate {
        subject: "CN=service.internal".to_string(),
        issuer: "CN=Internal CA".to_string(),
        serial: "0a:1b".to_string(),
        signature_algorithm: sig,
        public_key: key,
        not_before: now - Duration::days(10),
        not_after: now + Duration::days(90),
    }
}

#[test]
fn test_sha1_rsa_4096_fails_only_on_signature() {
    let cert = currently_valid(SignatureAlgorithm::Sha1WithRsa, KeyAlgorithm::Rsa(4096));
    let result = evaluate(&cert, &CompliancePolicy::fips_140_3());

    assert!(!result.is_compliant);
    assert_eq!(result.reasons.len(), 1);
    assert!(result.reasons[0].contains("SHA1-RSA"));
}

#[test]
fn test_sha256_rsa_1024_fails_only_on_key_size() {
    let cert = currently_valid(SignatureAlgorithm::Sha256WithRsa, KeyAlgorithm::Rsa(1024));
    let result = evaluate(&cert, &CompliancePolicy::fips_140_3());

    assert!(!result.is_compliant);
    assert_eq!(
        result.reasons,
        vec!["Public key type or size is not FIPS 140-3 compliant"]
    );
}

#[test]
fn test_ecdsa_sha384_p384_is_compliant() {
    let cert = currently_valid(
        SignatureAlgorithm::EcdsaWithSha384,
        KeyAlgorithm::Ecdsa("P-384".to_string()),
    );
    let result = evaluate(&cert, &CompliancePolicy::fips_140_3());

    assert!(result.is_compliant);
    assert!(result.reasons.is_empty());
}

#[test]
fn test_expired_certificate_explained_in_days() {
    let mut cert = currently_valid(
        SignatureAlgorithm::EcdsaWithSha256,
        KeyAlgorithm::Ecdsa("P-256".to_string()),
    );
    cert.not_before = Utc::now() - Duration::days(400);
    cert.not_after = Utc::now() - Duration::days(10);

    let message = explain_validity(&cert);
    assert!(message.contains("expired"), "{}", message);
    assert!(message.contains("10"), "{}", message);

    // Expiry is reported by the compliance check too, but only as a single reason
    let result = evaluate(&cert, &CompliancePolicy::fips_140_3());
    assert_eq!(
        result.reasons,
        vec!["Certificate is expired or not yet valid"]
    );
}

#[test]
fn test_not_yet_valid_certificate() {
    let mut cert = currently_valid(SignatureAlgorithm::Sha384WithRsa, KeyAlgorithm::Rsa(3072));
    cert.not_before = Utc::now() + Duration::days(5) + Duration::hours(1);
    cert.not_after = cert.not_before + Duration::days(365);

    assert!(explain_validity(&cert).contains("not yet valid"));
    assert!(!evaluate(&cert, &CompliancePolicy::fips_140_3()).is_compliant);
}

#[test]
fn test_evaluation_is_idempotent() {
    let cert = currently_valid(SignatureAlgorithm::DsaWithSha256, KeyAlgorithm::Dsa(2048));
    let policy = CompliancePolicy::fips_140_3();
    let now = Utc::now();

    let first = evaluate_at(&cert, &policy, now);
    let second = evaluate_at(&cert, &policy, now);
    assert_eq!(first, second);
    assert_eq!(first.reasons.len(), 2);
}

#[test]
fn test_compliance_flag_matches_reasons() {
    let policy = CompliancePolicy::fips_140_3();
    let keys = [
        KeyAlgorithm::Rsa(1024),
        KeyAlgorithm::Rsa(2048),
        KeyAlgorithm::Ecdsa("P-521".to_string()),
        KeyAlgorithm::Ecdsa("P-224".to_string()),
        KeyAlgorithm::Dsa(3072),
        KeyAlgorithm::Unknown("Ed25519".to_string()),
    ];
    let sigs = [
        SignatureAlgorithm::Sha512WithRsa,
        SignatureAlgorithm::Md5WithRsa,
        SignatureAlgorithm::Other("1.2.3.4".to_string()),
    ];

    for key in &keys {
        for sig in &sigs {
            let cert = currently_valid(sig.clone(), key.clone());
            let result = evaluate(&cert, &policy);
            assert_eq!(result.is_compliant, result.reasons.is_empty());
        }
    }
}
