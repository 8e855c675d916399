//! Certificate decoding
//!
//! Turns PEM or DER input into [`ParsedCertificate`] values using
//! x509-parser. This is the only place certificate bytes are parsed.

use crate::certificate::info::{KeyAlgorithm, ParsedCertificate, SignatureAlgorithm};
use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;
use tracing::debug;
use x509_parser::der_parser::der::parse_der_integer;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
const OID_DSA: &str = "1.2.840.10040.4.1";
const OID_ED25519: &str = "1.3.101.112";
const OID_ED448: &str = "1.3.101.113";

/// Read every certificate in a PEM or DER file
pub fn read_certificates(path: &Path) -> Result<Vec<ParsedCertificate>, CertificateError> {
    let data = std::fs::read(path).map_err(|e| CertificateError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let certs = decode_certificates(&data)?;
    debug!(path = %path.display(), count = certs.len(), "decoded certificates");
    Ok(certs)
}

/// Decode PEM (every CERTIFICATE block) or a single DER certificate
pub fn decode_certificates(data: &[u8]) -> Result<Vec<ParsedCertificate>, CertificateError> {
    let is_pem = std::str::from_utf8(data)
        .map(|text| text.contains("-----BEGIN "))
        .unwrap_or(false);

    if !is_pem {
        return Ok(vec![decode_der(data)?]);
    }

    let pems = ::pem::parse_many(data).map_err(|e| CertificateError::PemError {
        message: e.to_string(),
    })?;

    let certs = pems
        .iter()
        .filter(|p| p.tag() == "CERTIFICATE")
        .map(|p| decode_der(p.contents()))
        .collect::<Result<Vec<_>, _>>()?;

    if certs.is_empty() {
        return Err(CertificateError::NoCertificate);
    }

    Ok(certs)
}

/// Decode one DER-encoded certificate
pub fn decode_der(der: &[u8]) -> Result<ParsedCertificate, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
        message: format!("{:?}", e),
    })?;

    let signature_algorithm =
        SignatureAlgorithm::from_oid(&cert.signature_algorithm.algorithm.to_id_string());

    Ok(ParsedCertificate {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        serial: cert.raw_serial_as_string(),
        signature_algorithm,
        public_key: extract_key_algorithm(&cert),
        not_before: asn1_time_to_datetime(cert.validity().not_before, "notBefore")?,
        not_after: asn1_time_to_datetime(cert.validity().not_after, "notAfter")?,
    })
}

fn extract_key_algorithm(cert: &X509Certificate) -> KeyAlgorithm {
    let spki = cert.public_key();
    let alg_oid = spki.algorithm.algorithm.to_id_string();

    match alg_oid.as_str() {
        OID_RSA_ENCRYPTION => match spki.parsed() {
            Ok(PublicKey::RSA(rsa)) => KeyAlgorithm::Rsa(integer_bit_length(rsa.modulus)),
            _ => KeyAlgorithm::Unknown("malformed RSA key".to_string()),
        },
        OID_EC_PUBLIC_KEY => {
            let curve = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|p| p.as_oid().ok())
                .map(|oid| curve_name(&oid.to_id_string()))
                .unwrap_or_else(|| "Unknown".to_string());
            KeyAlgorithm::Ecdsa(curve)
        }
        OID_DSA => {
            // Sized by the prime p; inherited parameters leave only y
            let p_bits = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|params| parse_der_integer(params.data).ok())
                .and_then(|(_, p)| p.as_slice().ok().map(integer_bit_length));
            match (p_bits, spki.parsed()) {
                (Some(bits), _) => KeyAlgorithm::Dsa(bits),
                (None, Ok(PublicKey::DSA(y))) => KeyAlgorithm::Dsa(integer_bit_length(y)),
                (None, _) => KeyAlgorithm::Dsa(0),
            }
        }
        OID_ED25519 => KeyAlgorithm::Unknown("Ed25519".to_string()),
        OID_ED448 => KeyAlgorithm::Unknown("Ed448".to_string()),
        _ => KeyAlgorithm::Unknown(alg_oid),
    }
}

/// NIST name for a named-curve OID; other curves keep their dotted OID
fn curve_name(oid: &str) -> String {
    match oid {
        "1.3.132.0.33" => "P-224".to_string(),
        "1.2.840.10045.3.1.7" => "P-256".to_string(),
        "1.3.132.0.34" => "P-384".to_string(),
        "1.3.132.0.35" => "P-521".to_string(),
        other => other.to_string(),
    }
}

/// Bit length of a big-endian unsigned integer, ignoring leading zero bytes
fn integer_bit_length(bytes: &[u8]) -> u32 {
    let Some(first) = bytes.iter().position(|&b| b != 0) else {
        return 0;
    };
    let significant = &bytes[first..];
    (significant.len() as u32 - 1) * 8 + (8 - significant[0].leading_zeros())
}

fn asn1_time_to_datetime(time: ASN1Time, field: &str) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| CertificateError::InvalidTimestamp {
            field: field.to_string(),
        })
}
