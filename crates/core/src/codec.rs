//! Streaming encode and decode.
//!
//! Encoding concatenates, in input order, each byte's code word from a
//! [`CodeTable`]. Decoding runs a state machine over the [`HuffmanTree`]:
//! starting at the root, consume one bit per step (`0` = left, `1` = right),
//! emit the symbol and reset to the root on every leaf. The stream must end
//! with the automaton exactly at the root — ending mid-path means the data
//! was truncated or corrupted and is reported, never silently accepted.
//!
//! Both functions are pure: no shared state, no I/O. Encoding needs only
//! the code table; decoding needs the tree itself (tree identity, not code
//! table identity, is the decode contract).

use crate::bitio::{BitReader, EncodedStream};
use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Node};

/// Encode `data` as the concatenation of its symbols' code words.
///
/// Empty input yields an empty stream.
///
/// # Errors
/// `HuffmanError::SymbolNotInTable` if any input byte has no code word —
/// the table was built from different statistics than this data.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<EncodedStream> {
    let mut stream = EncodedStream::with_capacity(data.len());
    for &byte in data {
        let code = table
            .code(byte)
            .ok_or(HuffmanError::SymbolNotInTable { symbol: byte })?;
        for bit in code.iter() {
            stream.push(bit);
        }
    }
    Ok(stream)
}

/// Decode `stream` against the tree used at encode time.
///
/// # Errors
/// - `HuffmanError::EmptyTreeNonEmptyStream` if the tree has no symbols
///   but the stream has bits
/// - `HuffmanError::MalformedStream` if the stream ends mid-code, or
///   contains a `1` bit under a single-leaf tree (the lone symbol's only
///   code is `0`)
pub fn decode(stream: &EncodedStream, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let Some(root) = tree.root() else {
        if stream.is_empty() {
            return Ok(Vec::new());
        }
        return Err(HuffmanError::EmptyTreeNonEmptyStream.into());
    };

    let mut reader = BitReader::new(stream);
    let mut output = Vec::new();

    // Degenerate single-leaf tree: root is the leaf, and each `0` bit is
    // one emission of the sole symbol.
    if let Node::Leaf { symbol, .. } = root {
        while let Some(bit) = reader.read_bit() {
            if bit {
                return Err(HuffmanError::MalformedStream {
                    bit_position: reader.position() - 1,
                }
                .into());
            }
            output.push(*symbol);
        }
        return Ok(output);
    }

    let mut node = root;
    while let Some(bit) = reader.read_bit() {
        // `node` is internal here: it is either the root (internal, since
        // the single-leaf case returned above) or was reset on a leaf.
        let next = match node {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            Node::Leaf { .. } => {
                return Err(HuffmanError::MalformedStream {
                    bit_position: reader.position() - 1,
                }
                .into())
            }
        };

        match next {
            Node::Leaf { symbol, .. } => {
                output.push(*symbol);
                node = root;
            }
            internal => node = internal,
        }
    }

    // The automaton must be back at the root when the bits run out;
    // anywhere else means the last code word was cut short.
    if !std::ptr::eq(node, root) {
        return Err(HuffmanError::MalformedStream {
            bit_position: stream.bit_len(),
        }
        .into());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::freq::FreqTable;

    fn build(data: &[u8]) -> (HuffmanTree, CodeTable) {
        let tree = HuffmanTree::from_frequencies(&FreqTable::from_bytes(data));
        let table = CodeTable::from_tree(&tree);
        (tree, table)
    }

    #[test]
    fn test_round_trip() {
        let data = b"ana are mere";
        let (tree, table) = build(data);

        let stream = encode(data, &table).unwrap();
        let decoded = decode(&stream, &tree).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encoded_length_is_weighted_code_length() {
        let data = b"ana are mere";
        let (_, table) = build(data);
        let stream = encode(data, &table).unwrap();

        let expected: usize = data
            .iter()
            .map(|&b| table.code(b).expect("present").len())
            .sum();
        assert_eq!(stream.bit_len(), expected);
        // Known optimum for {a:3, e:3, r:2, ' ':2, n:1, m:1}
        assert_eq!(stream.bit_len(), 30);
    }

    #[test]
    fn test_empty_input_empty_stream() {
        let (tree, table) = build(b"");
        let stream = encode(b"", &table).unwrap();
        assert!(stream.is_empty());
        assert_eq!(decode(&stream, &tree).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_stream_is_zero_bits() {
        let data = b"aaaa";
        let (tree, table) = build(data);

        let stream = encode(data, &table).unwrap();
        assert_eq!(stream.bit_len(), 4);
        assert_eq!(stream.as_bytes(), &[0b00000000]);

        assert_eq!(decode(&stream, &tree).unwrap(), data);
    }

    #[test]
    fn test_single_leaf_rejects_one_bit() {
        let (tree, _) = build(b"aaaa");

        let mut stream = EncodedStream::new();
        stream.push(false);
        stream.push(true);

        let err = decode(&stream, &tree).unwrap_err();
        assert!(matches!(
            err,
            Error::Huffman(HuffmanError::MalformedStream { bit_position: 1 })
        ));
    }

    #[test]
    fn test_symbol_not_in_table() {
        let (_, table) = build(b"ab");
        let err = encode(b"abz", &table).unwrap_err();
        assert!(matches!(
            err,
            Error::Huffman(HuffmanError::SymbolNotInTable { symbol: b'z' })
        ));
    }

    #[test]
    fn test_truncated_stream_is_malformed() {
        let data = b"hello world";
        let (tree, table) = build(data);
        let stream = encode(data, &table).unwrap();

        // Drop the last bit: the final code word is cut short
        let truncated = EncodedStream::from_parts(
            stream.as_bytes()[..(stream.bit_len() - 1).div_ceil(8)].to_vec(),
            stream.bit_len() - 1,
        )
        .unwrap();

        let err = decode(&truncated, &tree).unwrap_err();
        assert!(matches!(
            err,
            Error::Huffman(HuffmanError::MalformedStream { .. })
        ));
    }

    #[test]
    fn test_empty_tree_nonempty_stream() {
        let (tree, _) = build(b"");
        let mut stream = EncodedStream::new();
        stream.push(false);

        let err = decode(&stream, &tree).unwrap_err();
        assert!(matches!(
            err,
            Error::Huffman(HuffmanError::EmptyTreeNonEmptyStream)
        ));
    }

    #[test]
    fn test_shared_tree_encodes_other_texts() {
        // Statistics come from one text; any text over the same alphabet
        // round-trips through the same tree.
        let (tree, table) = build(b"hello world");

        for text in [&b"lord"[..], b"lol", b"dew", b""] {
            let stream = encode(text, &table).unwrap();
            assert_eq!(decode(&stream, &tree).unwrap(), text);
        }
    }
}
