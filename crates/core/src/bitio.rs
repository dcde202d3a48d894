//! Bit-level storage for encoded streams.
//!
//! Huffman code words are not byte-aligned, so the encoded form of an input
//! is a sequence of bits whose length is rarely a multiple of 8. This module
//! provides `EncodedStream`, a packed bit buffer that tracks its exact bit
//! length, and `BitReader`, a cursor that stops precisely at that length
//! rather than at the padded byte boundary.
//!
//! Bits are packed MSB-first: the first bit pushed occupies the most
//! significant bit of the first byte. The final partial byte is zero-padded,
//! and the padding is never visible through `BitReader`.

use crate::error::{ArtifactError, Result};

/// A packed sequence of bits with an explicit bit length.
///
/// # Invariants
/// - `bytes.len() == bit_len.div_ceil(8)`
/// - padding bits in the last byte are zero
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedStream {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl EncodedStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Reconstruct a stream from packed bytes and an exact bit count.
    ///
    /// Used when parsing a serialized artifact, where the bit length is
    /// carried separately from the payload bytes.
    ///
    /// # Errors
    /// `ArtifactError::BitLengthMismatch` if `bytes` is not exactly the
    /// number of bytes needed to hold `bit_len` bits.
    pub fn from_parts(bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        if bytes.len() != bit_len.div_ceil(8) {
            return Err(ArtifactError::BitLengthMismatch {
                bit_len,
                byte_len: bytes.len(),
            }
            .into());
        }
        Ok(Self { bytes, bit_len })
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Total number of bits in the stream.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// True if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// The packed bytes, last byte zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read the bit at `index`, or `None` past the end.
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some(byte & (1 << (7 - index % 8)) != 0)
    }
}

/// A forward-only cursor over an `EncodedStream`.
///
/// Respects the stream's exact bit length: once `bit_len` bits have been
/// read, `read_bit` returns `None` even if padding bits remain in the
/// final byte.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    stream: &'a EncodedStream,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit.
    pub fn new(stream: &'a EncodedStream) -> Self {
        Self {
            stream,
            position: 0,
        }
    }

    /// Read the next bit, or `None` at end of stream.
    pub fn read_bit(&mut self) -> Option<bool> {
        let bit = self.stream.bit(self.position)?;
        self.position += 1;
        Some(bit)
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bits left to read.
    pub fn bits_remaining(&self) -> usize {
        self.stream.bit_len() - self.position
    }
}
