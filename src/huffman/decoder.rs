use log::debug;

use crate::error::HuffmanError;
use crate::huffman::bits::BitReader;
use crate::huffman::code_table::EncodingTable;
use crate::huffman::CompressedArtifact;
use crate::Symbol;

/// A node of the tree rebuilt from parsed codewords.
///
/// Unlike the construction-side tree, children are optional here: the tree
/// grows one codeword path at a time and an artifact may legitimately
/// describe an incomplete tree (a single-symbol codebook has no `1` branch
/// under the root).
#[derive(Debug, Default)]
struct DecodeNode {
    symbol: Option<Symbol>,
    zero: Option<Box<DecodeNode>>,
    one: Option<Box<DecodeNode>>,
}

impl DecodeNode {
    fn child(&self, bit: bool) -> Option<&DecodeNode> {
        if bit {
            self.one.as_deref()
        } else {
            self.zero.as_deref()
        }
    }

    fn child_mut(&mut self, bit: bool) -> &mut Option<Box<DecodeNode>> {
        if bit {
            &mut self.one
        } else {
            &mut self.zero
        }
    }
}

/// Walks an artifact's payload bitstream against the codebook parsed from
/// its header.
pub struct HuffmanDecoder {
    root: DecodeNode,
    payload: Vec<u8>,
    payload_bits: usize,
}

impl HuffmanDecoder {
    /// Parses the artifact's header and rebuilds the decode tree.
    ///
    /// The artifact is consumed: it is meant to be decoded once and
    /// discarded.
    pub fn new(artifact: CompressedArtifact) -> Result<Self, HuffmanError> {
        let table = EncodingTable::parse_header(&artifact.header)?;
        let root = Self::build_tree(&table)?;

        debug!("parsed codebook: {} distinct symbols", table.len());

        Ok(Self {
            root,
            payload: artifact.payload,
            payload_bits: artifact.payload_bits,
        })
    }

    fn build_tree(table: &EncodingTable) -> Result<DecodeNode, HuffmanError> {
        let mut root = DecodeNode::default();

        for (symbol, code) in table.iter() {
            let mut node = &mut root;

            for &bit in code {
                if node.symbol.is_some() {
                    // cannot happen: parse_header already rejects prefix
                    // collisions, and a leaf on the path is exactly that
                    return Err(HuffmanError::malformed(format!(
                        "codeword of symbol {symbol:#04x} passes through a leaf"
                    )));
                }
                node = &mut **node
                    .child_mut(bit)
                    .get_or_insert_with(|| Box::new(DecodeNode::default()));
            }

            node.symbol = Some(symbol);
        }

        Ok(root)
    }

    /// Decodes the whole payload back into the original symbol sequence.
    ///
    /// Reads exactly the artifact's meaningful bit count, so trailing
    /// padding bits are never mistaken for data.
    pub fn decode_all(&self) -> Result<Vec<u8>, HuffmanError> {
        let mut output = Vec::new();
        let mut node = &self.root;

        for bit in BitReader::new(&self.payload, self.payload_bits) {
            node = node.child(bit).ok_or_else(|| {
                HuffmanError::malformed("payload bits do not resolve to a codeword")
            })?;

            if let Some(symbol) = node.symbol {
                output.push(symbol);
                node = &self.root;
            }
        }

        if !std::ptr::eq(node, &self.root) {
            return Err(HuffmanError::malformed(
                "payload ends in the middle of a codeword",
            ));
        }

        Ok(output)
    }
}

/// Decompresses an artifact back into the original byte sequence.
///
/// The inverse of [`compress`](crate::compress): parse the header into a
/// codebook, rebuild the decode tree, then walk the payload bitstream
/// matching codewords until the meaningful bits run out.
pub fn decompress(artifact: CompressedArtifact) -> Result<Vec<u8>, HuffmanError> {
    HuffmanDecoder::new(artifact)?.decode_all()
}
