//! Self-describing serialization of an encoded stream.
//!
//! An encoded bit stream is only decodable with the exact tree used at
//! encode time, and its bit count is not recoverable from byte-padded data.
//! The artifact therefore carries both: the frequency table (from which the
//! decoder rebuilds the identical tree, given the deterministic builder)
//! and the exact bit length, protected by a CRC32.
//!
//! # Artifact Format
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x55 0x46 0x31 ("HUF1")
//! +------------------+
//! | bit_len (8)      |  u64 little-endian, exact encoded bit count
//! +------------------+
//! | table_len (2)    |  u16 length of the serialized frequency table
//! +------------------+
//! | crc32 (4)        |  u32 checksum (see below)
//! +------------------+
//! | frequency table  |  table_len bytes, 9 per present symbol
//! | (variable)       |
//! +------------------+
//! | payload          |  ceil(bit_len / 8) bytes of packed code bits
//! | (variable)       |
//! +------------------+
//! ```
//!
//! # CRC Coverage
//!
//! The CRC32 covers bit_len, table_len, the frequency table, and the
//! payload. This detects corruption in both header and data.
//!
//! Empty input is a valid artifact: zero table entries, zero payload bytes.

use crate::bitio::EncodedStream;
use crate::codec;
use crate::codes::CodeTable;
use crate::error::{ArtifactError, Result};
use crate::freq::FreqTable;
use crate::tree::HuffmanTree;

/// Magic number for artifacts: "HUF1"
const MAGIC: [u8; 4] = [0x48, 0x55, 0x46, 0x31];

/// Size of the artifact header in bytes
const HEADER_SIZE: usize = 18;

/// A decodable compression artifact: the statistics plus the encoded bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Frequency table the encode-time tree was built from
    pub freqs: FreqTable,

    /// Encoded bit stream with its exact bit length
    pub stream: EncodedStream,
}

impl Artifact {
    /// Serialize into bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let table = self.freqs.to_wire();
        let payload = self.stream.as_bytes();

        let bit_len = self.stream.bit_len() as u64;
        let table_len = table.len() as u16;
        let crc32 = compute_crc(bit_len, table_len, &table, payload);

        let mut bytes = Vec::with_capacity(HEADER_SIZE + table.len() + payload.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&bit_len.to_le_bytes());
        bytes.extend_from_slice(&table_len.to_le_bytes());
        bytes.extend_from_slice(&crc32.to_le_bytes());
        bytes.extend_from_slice(&table);
        bytes.extend_from_slice(payload);

        bytes
    }

    /// Parse an artifact from bytes.
    ///
    /// # Errors
    /// - `ArtifactError::InvalidMagic` if the magic number doesn't match
    /// - `ArtifactError::TooShort` if the buffer doesn't hold what the
    ///   header declares
    /// - `ArtifactError::Crc` if the checksum fails
    /// - Propagates frequency-table and bit-length validation errors
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ArtifactError::TooShort {
                required: HEADER_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
        if magic != MAGIC {
            return Err(ArtifactError::InvalidMagic {
                expected: MAGIC,
                actual: magic,
            }
            .into());
        }

        let bit_len = u64::from_le_bytes(bytes[4..12].try_into().unwrap()) as usize;
        let table_len = u16::from_le_bytes(bytes[12..14].try_into().unwrap()) as usize;
        let crc32 = u32::from_le_bytes(bytes[14..18].try_into().unwrap());

        let payload_len = bit_len.div_ceil(8);
        let expected_size = HEADER_SIZE + table_len + payload_len;
        if bytes.len() != expected_size {
            return Err(ArtifactError::TooShort {
                required: expected_size,
                actual: bytes.len(),
            }
            .into());
        }

        let table = &bytes[HEADER_SIZE..HEADER_SIZE + table_len];
        let payload = &bytes[HEADER_SIZE + table_len..];

        let computed = compute_crc(bit_len as u64, table_len as u16, table, payload);
        if computed != crc32 {
            return Err(ArtifactError::Crc {
                expected: crc32,
                actual: computed,
            }
            .into());
        }

        Ok(Self {
            freqs: FreqTable::from_wire(table)?,
            stream: EncodedStream::from_parts(payload.to_vec(), bit_len)?,
        })
    }
}

/// Compute CRC32 over the protected fields.
fn compute_crc(bit_len: u64, table_len: u16, table: &[u8], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&bit_len.to_le_bytes());
    hasher.update(&table_len.to_le_bytes());
    hasher.update(table);
    hasher.update(payload);
    hasher.finalize()
}

/// Compress `data` into a self-describing artifact.
///
/// Runs the full pipeline: frequency analysis, tree construction, code
/// derivation, encoding, serialization. Empty input is valid and produces
/// an artifact that decompresses to empty output.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let freqs = FreqTable::from_bytes(data);
    let tree = HuffmanTree::from_frequencies(&freqs);
    let table = CodeTable::from_tree(&tree);
    let stream = codec::encode(data, &table)?;

    Ok(Artifact { freqs, stream }.serialize())
}

/// Decompress an artifact back to the original bytes.
///
/// Rebuilds the tree from the transmitted frequency table; the
/// deterministic builder guarantees it is identical to the encode-time
/// tree.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let artifact = Artifact::parse(bytes)?;
    let tree = HuffmanTree::from_frequencies(&artifact.freqs);
    codec::decode(&artifact.stream, &tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compress_decompress_round_trip() {
        let data = b"ala bala portocala?!";
        let artifact = compress(data).unwrap();
        assert_eq!(decompress(&artifact).unwrap(), data);
    }

    #[test]
    fn test_serialize_parse_round_trip() {
        let data = b"hello world";
        let bytes = compress(data).unwrap();

        let artifact = Artifact::parse(&bytes).unwrap();
        assert_eq!(artifact.freqs, FreqTable::from_bytes(data));
        assert_eq!(artifact.serialize(), bytes);
    }

    #[test]
    fn test_empty_input_round_trips() {
        let bytes = compress(b"").unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(decompress(&bytes).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_round_trips() {
        let bytes = compress(b"aaaa").unwrap();
        let artifact = Artifact::parse(&bytes).unwrap();
        assert_eq!(artifact.stream.bit_len(), 4);
        assert_eq!(decompress(&bytes).unwrap(), b"aaaa");
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = compress(b"abc").unwrap();
        bytes[0] = 0xFF;

        let result = Artifact::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Artifact(ArtifactError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_too_short() {
        let bytes = vec![0u8; HEADER_SIZE - 1];
        let result = Artifact::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Artifact(ArtifactError::TooShort { .. }))
        ));
    }

    #[test]
    fn test_declared_lengths_must_match_buffer() {
        let mut bytes = compress(b"some data here").unwrap();
        bytes.pop();

        let result = Artifact::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Artifact(ArtifactError::TooShort { .. }))
        ));
    }

    #[test]
    fn test_corrupt_payload_fails_crc() {
        let mut bytes = compress(b"test data for crc validation").unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let result = Artifact::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Artifact(ArtifactError::Crc { .. }))
        ));
    }

    #[test]
    fn test_corrupt_table_fails_crc() {
        let mut bytes = compress(b"test data").unwrap();
        bytes[HEADER_SIZE] ^= 0xFF; // first frequency record

        let result = Artifact::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Artifact(ArtifactError::Crc { .. }))
        ));
    }

    #[test]
    fn test_large_single_symbol_input_compresses() {
        let data = vec![b'X'; 65536];
        let bytes = compress(&data).unwrap();

        // One bit per byte plus a fixed header: far below half the input
        assert!(bytes.len() < data.len() / 2);
        assert_eq!(decompress(&bytes).unwrap(), data);
    }
}
