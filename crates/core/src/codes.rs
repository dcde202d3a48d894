//! Code word derivation from a Huffman tree.
//!
//! A pre-order walk of the tree assigns every leaf the bit path from the
//! root: `0` for a left descent, `1` for a right descent. Because each
//! symbol sits at a distinct leaf and no leaf is an ancestor of another,
//! the resulting table is prefix-free by construction.
//!
//! # Single-leaf rule
//!
//! When the tree is a lone leaf the root-to-leaf path is empty, and a
//! zero-length code cannot distinguish repetitions of the symbol. The lone
//! symbol is therefore assigned the one-bit code `0`. The decoder applies
//! the matching rule (see [`crate::codec`]).

use std::fmt;

use crate::tree::{HuffmanTree, Node};

/// One symbol's code word: an ordered sequence of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWord {
    bits: Vec<bool>,
}

impl CodeWord {
    /// Number of bits in the code word.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-length code (never produced by `CodeTable`).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate over the bits, most significant (root-most) first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Code words for every symbol present in the tree the table was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<CodeWord>; 256],
}

impl CodeTable {
    /// Derive the code table for `tree`.
    ///
    /// An empty tree yields an empty table; a lone-leaf tree yields the
    /// one-bit code `0` for its symbol.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes: [Option<CodeWord>; 256] = std::array::from_fn(|_| None);

        match tree.root() {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                codes[*symbol as usize] = Some(CodeWord { bits: vec![false] });
            }
            Some(root) => {
                let mut path = Vec::new();
                walk(root, &mut path, &mut codes);
            }
        }

        Self { codes }
    }

    /// The code word for `symbol`, if it was present in the source tree.
    pub fn code(&self, symbol: u8) -> Option<&CodeWord> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &CodeWord)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|code| (i as u8, code)))
    }
}

/// Pre-order walk accumulating the root-to-node bit path.
fn walk(node: &Node, path: &mut Vec<bool>, codes: &mut [Option<CodeWord>; 256]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(CodeWord { bits: path.clone() });
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            walk(left, path, codes);
            path.pop();

            path.push(true);
            walk(right, path, codes);
            path.pop();
        }
    }
}
