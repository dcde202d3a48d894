//! huffcode-core: Huffman prefix-code compression codec
//!
//! This library builds an optimal prefix code from the byte frequencies of
//! an input and provides streaming encode/decode plus a self-describing
//! serialized artifact:
//! - Scans input bytes into a frequency table
//! - Builds the Huffman tree with a greedy, deterministic merge
//! - Derives a prefix-free code table from the tree
//! - Encodes/decodes bit streams with exact bit-length tracking
//! - Packages the stream with its statistics for standalone decoding
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: frequency analysis and its wire form
//! - `heap`: stable min-priority queue (FIFO among equal priorities)
//! - `tree`: greedy Huffman tree construction
//! - `codes`: code word derivation (including the single-leaf rule)
//! - `codec`: streaming encoder and decoding automaton
//! - `bitio`: packed bit storage with explicit bit length
//! - `artifact`: serialized container with CRC integrity
//!
//! # Design Principles
//!
//! - **No panics**: all failure paths return structured errors
//! - **Deterministic**: equal inputs always produce identical trees,
//!   tables, and bit streams
//! - **Pure**: every operation is a function of its inputs with no shared
//!   or process-wide state
//! - **Self-describing**: an artifact carries everything needed to decode
//!   it — the statistics and the exact bit count

pub mod artifact;
pub mod bitio;
pub mod codec;
pub mod codes;
pub mod error;
pub mod freq;
pub mod heap;
pub mod tree;

// Re-export commonly used types
pub use artifact::{compress, decompress};
pub use error::{Error, Result};
