//! Decoding, either through an inverted code table or by walking the tree.
//!
//! Both strategies give the same output for any table derived from a tree.
//! Digits left over at the end that don't complete a code are dropped, not
//! reported as an error; the `_detailed` variants say how many there were.

use std::hash::Hash;

use bitvec::{slice::BitSlice, vec::BitVec};
use log::debug;

use crate::{code_table::CodeTable, tree::Node};

/// The result of decoding a bit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<S> {
    pub symbols: Vec<S>,

    /// Number of digits at the end of the input that didn't complete a code,
    /// and were dropped.
    pub trailing: usize,
}

/// Decode `bits` using the inverse of `table`.
pub fn decode<S: Eq + Hash + Clone>(bits: &BitSlice, table: &CodeTable<S>) -> Vec<S> {
    decode_detailed(bits, table).symbols
}

/// Like [`decode`], but also report how many trailing digits were dropped.
pub fn decode_detailed<S: Eq + Hash + Clone>(
    bits: &BitSlice,
    table: &CodeTable<S>,
) -> Decoded<S> {
    let inverse = table.invert();

    let mut symbols = Vec::new();
    let mut candidate: BitVec = BitVec::new();
    for bit in bits.iter().by_vals() {
        candidate.push(bit);
        // The table is prefix-free, so the first match is the only match.
        if let Some(symbol) = inverse.get(&candidate) {
            symbols.push(symbol.clone());
            candidate.clear();
        }
    }

    finish(symbols, candidate.len())
}

/// Decode `bits` by walking the tree from `root`: `0` goes left, `1` goes
/// right, and reaching a leaf emits its symbol.
pub fn decode_with_tree<S: Clone>(bits: &BitSlice, root: Option<&Node<S>>) -> Vec<S> {
    decode_with_tree_detailed(bits, root).symbols
}

/// Like [`decode_with_tree`], but also report how many trailing digits were
/// dropped.
pub fn decode_with_tree_detailed<S: Clone>(
    bits: &BitSlice,
    root: Option<&Node<S>>,
) -> Decoded<S> {
    let Some(root) = root else {
        return finish(Vec::new(), bits.len());
    };

    let mut symbols = Vec::new();
    let mut node = root;
    let mut pending = 0;
    for bit in bits.iter().by_vals() {
        let Node::Internal { left, right, .. } = node else {
            // A lone leaf has the empty code, which no digit can complete.
            return finish(symbols, bits.len());
        };

        node = if bit { &**right } else { &**left };
        pending += 1;

        if let Node::Leaf { symbol, .. } = node {
            symbols.push(symbol.clone());
            node = root;
            pending = 0;
        }
    }

    finish(symbols, pending)
}

fn finish<S>(symbols: Vec<S>, trailing: usize) -> Decoded<S> {
    if trailing != 0 {
        debug!("dropped {trailing} trailing digits that don't complete a code");
    }
    debug!("decoded {} symbols", symbols.len());
    Decoded { symbols, trailing }
}
