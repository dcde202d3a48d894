//! Frequency analysis of byte sequences.
//!
//! A `FreqTable` maps every byte value (0-255) to its occurrence count in
//! one input. It is built once per input and is immutable afterward; only
//! symbols with a non-zero count participate in tree construction.
//!
//! The table also has a wire form so a decoder can rebuild the exact tree
//! used at encode time: one 9-byte record per present symbol, ascending by
//! symbol value — `symbol (u8)` followed by `count (u64 little-endian)`.

use crate::error::{ArtifactError, Result};

/// Bytes per serialized frequency record: symbol (1) + count (8).
pub const WIRE_RECORD_SIZE: usize = 9;

/// Occurrence counts for every byte value in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    /// Scan `data` and count occurrences of each byte value.
    ///
    /// An empty input yields a table with no present symbols, which is a
    /// valid terminal state (the resulting tree is empty).
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `symbol` (zero if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts (the input length).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True if no symbol is present.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over present symbols in ascending symbol order.
    ///
    /// The order is deterministic so that the tree builder seeds its
    /// priority queue identically on every run.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }

    /// Serialize the present symbols to wire records.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.distinct() * WIRE_RECORD_SIZE);
        for (symbol, count) in self.symbols() {
            out.push(symbol);
            out.extend_from_slice(&count.to_le_bytes());
        }
        out
    }

    /// Rebuild a table from wire records.
    ///
    /// # Errors
    /// `ArtifactError::TruncatedFrequencyTable` if `bytes` is not a whole
    /// number of records.
    pub fn from_wire(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WIRE_RECORD_SIZE != 0 {
            return Err(ArtifactError::TruncatedFrequencyTable {
                len: bytes.len(),
                record: WIRE_RECORD_SIZE,
            }
            .into());
        }

        let mut counts = [0u64; 256];
        for record in bytes.chunks_exact(WIRE_RECORD_SIZE) {
            let symbol = record[0];
            // chunks_exact guarantees 8 bytes follow the symbol
            let count = u64::from_le_bytes(record[1..9].try_into().unwrap());
            counts[symbol as usize] = count;
        }
        Ok(Self { counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_distinct() {
        let table = FreqTable::from_bytes(b"ana are mere");
        assert_eq!(table.count(b'a'), 3);
        assert_eq!(table.count(b'e'), 3);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b' '), 2);
        assert_eq!(table.count(b'n'), 1);
        assert_eq!(table.count(b'm'), 1);
        assert_eq!(table.count(b'o'), 0);
        assert_eq!(table.distinct(), 6);
        assert_eq!(table.total(), 12);
    }

    #[test]
    fn test_empty_input() {
        let table = FreqTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.total(), 0);
        assert_eq!(table.symbols().count(), 0);
    }

    #[test]
    fn test_symbols_ascending() {
        let table = FreqTable::from_bytes(b"cba");
        let symbols: Vec<u8> = table.symbols().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_wire_round_trip() {
        let table = FreqTable::from_bytes(b"hello world");
        let wire = table.to_wire();
        assert_eq!(wire.len(), table.distinct() * WIRE_RECORD_SIZE);

        let rebuilt = FreqTable::from_wire(&wire).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_wire_round_trip_full_alphabet() {
        let data: Vec<u8> = (0..=255).collect();
        let table = FreqTable::from_bytes(&data);
        let rebuilt = FreqTable::from_wire(&table.to_wire()).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_wire_empty() {
        let table = FreqTable::from_bytes(b"");
        assert!(table.to_wire().is_empty());
        assert_eq!(FreqTable::from_wire(&[]).unwrap(), table);
    }

    #[test]
    fn test_wire_truncated() {
        let table = FreqTable::from_bytes(b"ab");
        let mut wire = table.to_wire();
        wire.pop();
        assert!(FreqTable::from_wire(&wire).is_err());
    }
}
