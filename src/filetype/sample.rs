//! Bounded byte sample taken from the start of a file

use std::io::Read;

/// Number of leading bytes examined per file
pub const SAMPLE_SIZE: usize = 512;

/// At most [`SAMPLE_SIZE`] bytes from the start of a file, with trailing
/// zero bytes trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSample {
    bytes: Vec<u8>,
}

impl ByteSample {
    /// Take a sample from an in-memory buffer
    pub fn new(data: &[u8]) -> Self {
        let window = &data[..data.len().min(SAMPLE_SIZE)];
        let end = window
            .iter()
            .rposition(|&b| b != 0)
            .map(|i| i + 1)
            .unwrap_or(0);

        Self {
            bytes: window[..end].to_vec(),
        }
    }

    /// Take a sample from the first bytes of a reader
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut buffer = Vec::with_capacity(SAMPLE_SIZE);
        reader.take(SAMPLE_SIZE as u64).read_to_end(&mut buffer)?;
        Ok(Self::new(&buffer))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for ByteSample {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
