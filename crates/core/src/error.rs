//! Error types for the Huffman codec.
//!
//! All operations return structured errors rather than panicking.
//! Each variant names the invariant that was violated, so callers can
//! distinguish "you built the code table from the wrong data" from
//! "the bit stream you handed me is corrupt".

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a failure domain:
/// - Huffman: encode/decode contract violations
/// - Artifact: parsing or integrity failures of the serialized container
#[derive(Debug, Error)]
pub enum Error {
    /// Codec error (encode or decode contract violated)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Artifact container error (bad header, truncation, corruption)
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Encode/decode errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// Encode saw a byte with no entry in the code table. The table was
    /// built from different (or incomplete) statistics than the input;
    /// the caller can recover by re-deriving the table from the actual data.
    #[error("symbol {symbol:#04x} has no code word in the table")]
    SymbolNotInTable { symbol: u8 },

    /// Decode consumed the whole stream without landing on a leaf, or hit
    /// an invalid bit under a single-leaf tree. Truncated or corrupt data.
    #[error("malformed stream: decode failed at bit position {bit_position}")]
    MalformedStream { bit_position: usize },

    /// Decode was given a non-empty stream but a tree with no symbols.
    #[error("cannot decode a non-empty stream against an empty tree")]
    EmptyTreeNonEmptyStream,
}

/// Artifact container errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    /// Invalid magic number in the header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Buffer is too small for the header or the lengths it declares
    #[error("artifact too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Payload byte length doesn't match the declared bit length
    #[error("bit length mismatch: {bit_len} bits cannot occupy {byte_len} bytes")]
    BitLengthMismatch { bit_len: usize, byte_len: usize },

    /// Serialized frequency table is not a whole number of records
    #[error("truncated frequency table: {len} bytes is not a multiple of {record}")]
    TruncatedFrequencyTable { len: usize, record: usize },

    /// CRC validation failed, indicating corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
