use std::{fmt::Debug, hash::Hash};

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{
    code_table::{derive_table, CodeTable},
    decoder,
    encoder,
    errors::EncodeError,
    frequencies::Frequencies,
    tree::{build_tree, Node},
};

/// A Huffman tree together with the code table derived from it.
#[derive(Debug, Clone)]
pub struct Codec<S: Eq + Hash> {
    tree: Option<Node<S>>,
    table: CodeTable<S>,
}

impl<S: Eq + Hash + Clone> Codec<S> {
    /// Build the tree and table for `symbols`.
    ///
    /// Empty input gives a codec with no tree and an empty table.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        Self::from_tree(build_tree(symbols))
    }

    pub fn from_frequencies(frequencies: &Frequencies<S>) -> Self {
        Self::from_tree(Node::from_frequencies(frequencies))
    }

    fn from_tree(tree: Option<Node<S>>) -> Self {
        let table = derive_table(tree.as_ref());
        Self { tree, table }
    }

    pub fn tree(&self) -> Option<&Node<S>> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn encode(&self, symbols: impl IntoIterator<Item = S>) -> Result<BitVec, EncodeError>
    where
        S: Debug,
    {
        encoder::encode(symbols, &self.table)
    }

    /// Decode through the code table. See [`decode`](crate::decode).
    pub fn decode(&self, bits: &BitSlice) -> Vec<S> {
        decoder::decode(bits, &self.table)
    }

    /// Decode by walking the tree. See [`decode_with_tree`](crate::decode_with_tree).
    pub fn decode_with_tree(&self, bits: &BitSlice) -> Vec<S> {
        decoder::decode_with_tree(bits, self.tree())
    }
}
