use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::error::HuffmanError;
use crate::huffman::tree::{HuffmanNode, HuffmanTree};
use crate::{Codeword, Symbol};

/// The symbol → codeword mapping the encoder consults.
///
/// Codewords come from a depth-first walk of the prefix tree (0 on a left
/// descent, 1 on a right descent), so no codeword is a prefix of another:
/// that would require one leaf to be an ancestor of another. Iteration is in
/// ascending symbol order, which is also the order the header is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    codes: BTreeMap<Symbol, Codeword>,
}

impl EncodingTable {
    /// Walks the tree and records the accumulated path at every leaf.
    ///
    /// A root that is itself a leaf (single-symbol input) gets codeword `0`
    /// rather than the empty path, so every symbol costs at least one bit.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        match &tree.root {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, vec![false]);
            }
            root => Self::assign(root, &mut Vec::new(), &mut codes),
        }

        EncodingTable { codes }
    }

    fn assign(node: &HuffmanNode, path: &mut Codeword, codes: &mut BTreeMap<Symbol, Codeword>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                Self::assign(left, path, codes);
                path.pop();

                path.push(true);
                Self::assign(right, path, codes);
                path.pop();
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    /// The number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, codeword)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Serializes the codebook: for each symbol in ascending order, the
    /// symbol byte followed by its codeword as ASCII `'0'`/`'1'` bytes, with
    /// no separator. The decoder relies on this exact order and on symbols
    /// being a single byte wide to split the stream back apart.
    pub fn serialize_header(&self) -> Vec<u8> {
        self.codes
            .iter()
            .flat_map(|(symbol, code)| {
                std::iter::once(*symbol)
                    .chain(code.iter().map(|bit| if *bit { b'1' } else { b'0' }))
            })
            .collect_vec()
    }

    /// Parses a serialized codebook back into a table.
    ///
    /// Each entry is one symbol byte followed by a maximal run of `'0'`/`'1'`
    /// bytes forming its codeword. An empty run, a repeated symbol or a
    /// prefix collision between two codewords means the header cannot come
    /// from [`serialize_header`] and is rejected.
    pub fn parse_header(header: &[u8]) -> Result<Self, HuffmanError> {
        let mut codes: BTreeMap<Symbol, Codeword> = BTreeMap::new();
        let mut rest = header;

        while let Some((&symbol, tail)) = rest.split_first() {
            let code_len = tail
                .iter()
                .take_while(|&&b| b == b'0' || b == b'1')
                .count();
            if code_len == 0 {
                return Err(HuffmanError::malformed(format!(
                    "header entry for symbol {symbol:#04x} has an empty codeword"
                )));
            }

            let code = tail[..code_len].iter().map(|&b| b == b'1').collect();

            match codes.entry(symbol) {
                Entry::Occupied(_) => {
                    return Err(HuffmanError::malformed(format!(
                        "header lists symbol {symbol:#04x} twice"
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(code);
                }
            }

            rest = &tail[code_len..];
        }

        let table = EncodingTable { codes };

        if table.is_empty() {
            return Err(HuffmanError::malformed("header holds no codebook entries"));
        }
        if let Some((a, b)) = table.prefix_collision() {
            return Err(HuffmanError::malformed(format!(
                "codewords of symbols {a:#04x} and {b:#04x} are not prefix-free"
            )));
        }

        Ok(table)
    }

    /// Returns a pair of symbols whose codewords violate prefix-freedom, if
    /// any. Tree-derived tables never have one; parsed headers must be
    /// checked.
    fn prefix_collision(&self) -> Option<(Symbol, Symbol)> {
        self.codes
            .iter()
            .tuple_combinations()
            .find(|((_, a), (_, b))| a.starts_with(b) || b.starts_with(a))
            .map(|((&a, _), (&b, _))| (a, b))
    }
}
