use std::fmt::Debug;
use std::hash::Hash;

pub mod code;
pub mod encoder;
pub mod frequency;
mod priority_queue;
pub mod tree;

pub use code::{BitString, CodeTable};
pub use encoder::{compression_ratio, encode, CompressionRatio, DEFAULT_BITS_PER_SYMBOL};
pub use frequency::{count_frequencies, count_frequencies_parallel};
pub use tree::{HuffmanTree, Node};

use crate::Result;

pub type Weight = usize;

/// Anything that can serve as a key of a code table.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: Weight,
}

impl<S> From<(S, Weight)> for SymbolFrequency<S> {
    fn from(value: (S, Weight)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

pub fn build_huffman_tree<S: Symbol>(symbols: &[S]) -> Result<HuffmanTree<S>> {
    HuffmanTree::new(symbols)
}

pub fn build_code_table<S: Symbol>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    CodeTable::from_tree(tree)
}
