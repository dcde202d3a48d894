//! Huffman tree construction.
//!
//! The tree is built greedily from a frequency table: every present symbol
//! starts as a leaf in a min-priority queue keyed by its count, and the two
//! lightest nodes are repeatedly merged under a new internal node until one
//! root remains. Leaves sit at depths inversely related to their frequency,
//! which is what makes the derived prefix code optimal.
//!
//! # Determinism
//!
//! Tree shape is not unique when frequencies tie. Two rules pin it down:
//! leaves enter the queue in ascending symbol order, and the queue breaks
//! priority ties first-inserted-first-extracted (see [`crate::heap`]).
//! Given the same input, every run produces a structurally identical tree.
//!
//! # Ownership
//!
//! Each node owns its children (`Box`), the caller owns the root. There are
//! no parent links; decoding only ever walks root-to-leaf.

use crate::freq::FreqTable;
use crate::heap::StableMinHeap;

/// A node of the Huffman tree: a symbol-bearing leaf or a merge point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A distinct input symbol and its occurrence count.
    Leaf { symbol: u8, weight: u64 },
    /// A merge of two subtrees; `weight` is the sum of both.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// The frequency weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for symbol-bearing leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman tree over the symbols of one frequency table.
///
/// The tree may be empty (no symbols) or a lone leaf (one distinct symbol);
/// both are valid terminal states that downstream stages special-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    /// Build the tree for `freqs` using greedy merging.
    ///
    /// The first of the two extracted nodes becomes the left child, so an
    /// extraction-order-stable queue fully determines the tree shape.
    pub fn from_frequencies(freqs: &FreqTable) -> Self {
        let mut queue = StableMinHeap::with_capacity(freqs.distinct());
        for (symbol, count) in freqs.symbols() {
            queue.insert(
                Node::Leaf {
                    symbol,
                    weight: count,
                },
                count,
            );
        }

        while queue.len() > 1 {
            // len() > 1 guarantees both extractions succeed
            let (Some(left), Some(right)) = (queue.extract_min(), queue.extract_min()) else {
                break;
            };
            let weight = left.weight() + right.weight();
            queue.insert(
                Node::Internal {
                    weight,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                weight,
            );
        }

        Self {
            root: queue.extract_min(),
        }
    }

    /// The root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree has no symbols.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
