//! Byte-signature probes
//!
//! Every probe is length-guarded: a sample that is too short for the probe
//! simply doesn't match.

/// Java KeyStore magic
pub const JKS_MAGIC: u32 = 0xFEED_FEED;

/// JCE KeyStore magic
pub const JCEKS_MAGIC: u32 = 0xCECE_CECE;

/// PEM armor header prefix
pub const PEM_HEADER: &[u8] = b"-----BEGIN ";

/// ASN.1 SEQUENCE tag
pub const ASN1_SEQUENCE: u8 = 0x30;

/// OBJECT IDENTIFIER 2.5.4 (X.500 attribute type) prefix
pub const X500_ATTRIBUTE_OID: &[u8] = &[0x06, 0x03, 0x55, 0x04];

/// INTEGER 0, the version field opening a PKCS#1/PKCS#8 private key
pub const INTEGER_ZERO: &[u8] = &[0x02, 0x01, 0x00];

/// OBJECT IDENTIFIER 1.2.840 (RSA Data Security) prefix
pub const RSA_OID_PREFIX: &[u8] = &[0x06, 0x09, 0x2A, 0x86, 0x48];

/// OBJECT IDENTIFIER 1.2.840.113549.1.12 (pkcs-12) prefix
pub const PKCS12_OID: &[u8] = &[0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x0C];

/// DOS/PE "MZ" header
pub const MZ_HEADER: &[u8] = &[0x4D, 0x5A];

/// ELF header
pub const ELF_HEADER: &[u8] = &[0x7F, 0x45, 0x4C, 0x46];

/// Read the first four bytes as a big-endian word
pub fn leading_be_u32(data: &[u8]) -> Option<u32> {
    let word: [u8; 4] = data.get(..4)?.try_into().ok()?;
    Some(u32::from_be_bytes(word))
}

/// Byte at `index`, if the sample is long enough
pub fn byte_at(data: &[u8], index: usize) -> Option<u8> {
    data.get(index).copied()
}

/// Does `data[..end]` contain `needle`?
///
/// When the sample is shorter than `end` the whole sample is searched.
pub fn window_contains(data: &[u8], end: usize, needle: &[u8]) -> bool {
    let window = &data[..data.len().min(end)];
    contains(window, needle)
}

/// Substring search over bytes
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Printable ASCII or one of TAB, LF, CR
pub fn is_text_byte(b: u8) -> bool {
    matches!(b, 0x20..=0x7E | b'\t' | b'\n' | b'\r')
}
