use std::{collections::HashMap, fmt::Debug, hash::Hash};

use bitvec::{slice::BitSlice, vec::BitVec};
use log::debug;

use crate::{errors::EncodeError, tree::Node};

/// Maps each symbol to its code: the path from the root of a Huffman tree
/// down to the symbol's leaf, with `0` for left and `1` for right.
///
/// A table derived from a tree is prefix-free. If the tree was a single leaf,
/// its one symbol maps to the empty code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    codes: HashMap<S, BitVec>,
}

/// Derive the code table for the tree rooted at `root`.
///
/// No tree (empty input) gives an empty table.
pub fn derive_table<S: Eq + Hash + Clone>(root: Option<&Node<S>>) -> CodeTable<S> {
    let mut codes = HashMap::new();

    // Depth-first, each node paired with the path leading to it.
    let mut stack: Vec<(&Node<S>, BitVec)> =
        root.into_iter().map(|r| (r, BitVec::new())).collect();
    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), path);
            }
            Node::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(true);
                stack.push((&**right, right_path));

                let mut left_path = path;
                left_path.push(false);
                stack.push((&**left, left_path));
            }
        }
    }

    debug!("derived {} codes", codes.len());
    CodeTable { codes }
}

impl<S: Eq + Hash> CodeTable<S> {
    /// The code for `symbol`, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&BitSlice> {
        self.codes.get(symbol).map(BitVec::as_bitslice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSlice)> + '_ {
        self.codes
            .iter()
            .map(|(symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Every symbol that has a code, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.codes.keys()
    }

    /// The reverse mapping, from code to symbol.
    pub fn invert(&self) -> HashMap<BitVec, S>
    where
        S: Clone,
    {
        self.codes
            .iter()
            .map(|(symbol, code)| (code.clone(), symbol.clone()))
            .collect()
    }

    /// Number of bits that encoding `symbols` with this table would produce.
    pub fn encoded_len<'a>(
        &self,
        symbols: impl IntoIterator<Item = &'a S>,
    ) -> Result<usize, EncodeError>
    where
        S: Debug + 'a,
    {
        symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| {
                self.codes
                    .get(symbol)
                    .map(BitVec::len)
                    .ok_or_else(|| EncodeError::UnknownSymbol {
                        position,
                        symbol: format!("{symbol:?}"),
                    })
            })
            .sum()
    }

    /// Whether no code is a prefix of another.
    ///
    /// Always true for a table derived from a tree; hand-built tables may not
    /// be, and won't decode unambiguously.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitVec> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes[i + 1..]
                .iter()
                .all(|b| !a.starts_with(b.as_bitslice()) && !b.starts_with(a.as_bitslice()))
        })
    }
}

/// Build a table from explicit `(symbol, code)` pairs.
impl<S: Eq + Hash> FromIterator<(S, BitVec)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, BitVec)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bitvec::{bitvec, order::Lsb0};
    use test_case::test_case;

    use super::*;
    use crate::{digits::to_digit_string, frequencies::Frequencies, tree::build_tree};

    fn table_for(input: &str) -> CodeTable<char> {
        derive_table(build_tree(input.chars()).as_ref())
    }

    #[test]
    fn no_tree_gives_empty_table() {
        let table = derive_table::<char>(None);
        assert!(table.is_empty());
        assert_eq!(table, CodeTable::from_iter([]));
    }

    #[test]
    fn single_leaf_gets_empty_code() {
        let table = table_for("AAAAA");
        assert_eq!(table, CodeTable::from_iter([('A', BitVec::new())]));
        assert_eq!(table.get(&'A').map(BitSlice::len), Some(0));
    }

    #[test]
    fn codes_follow_tree_paths() {
        let table = table_for("ABCDABCC");

        let mut codes: Vec<_> = table
            .iter()
            .map(|(&symbol, code)| (symbol, to_digit_string(code)))
            .collect();
        codes.sort();
        let expected = [('A', "01"), ('B', "10"), ('C', "11"), ('D', "00")]
            .map(|(symbol, code)| (symbol, code.to_string()));
        assert_eq!(codes, expected);
    }

    #[test_case("AB")]
    #[test_case("ABCDABCC")]
    #[test_case("ABCDFGABD")]
    #[test_case("abracadabra alakazam")]
    fn one_code_per_distinct_symbol(input: &str) {
        let table = table_for(input);
        let frequencies = Frequencies::from_symbols(input.chars());

        assert_eq!(table.len(), frequencies.len());
        for (symbol, _) in frequencies.iter() {
            assert!(!table.get(symbol).unwrap().is_empty());
        }

        let mut symbols: Vec<char> = table.symbols().copied().collect();
        symbols.sort();
        let mut expected: Vec<char> = frequencies.iter().map(|(&c, _)| c).collect();
        expected.sort();
        assert_eq!(symbols, expected);
    }

    #[test_case("AB")]
    #[test_case("ABCDFGABD")]
    #[test_case("she sells sea shells by the sea shore")]
    fn derived_tables_are_prefix_free(input: &str) {
        assert!(table_for(input).is_prefix_free());
    }

    #[test]
    fn detects_prefix_collision() {
        let table = CodeTable::from_iter([('x', bitvec![0]), ('y', bitvec![0, 1])]);
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let table = table_for("aaaaaaaabbbbccd");
        let len = |c| table.get(&c).unwrap().len();
        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert!(len('c') <= len('d'));
    }

    #[test]
    fn inverse_maps_codes_back() {
        let table = table_for("ABCDABCC");
        let inverse = table.invert();

        assert_eq!(inverse.len(), 4);
        for (symbol, code) in table.iter() {
            assert_eq!(inverse.get(&code.to_bitvec()), Some(symbol));
        }
    }

    #[test]
    fn encoded_len_sums_code_lengths() {
        let input: Vec<char> = "ABCDABCC".chars().collect();
        let table = table_for("ABCDABCC");
        assert_eq!(table.encoded_len(&input), Ok(16));

        let err = table.encoded_len(&['A', 'Z']).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownSymbol {
                position: 1,
                symbol: "'Z'".into()
            }
        );
    }
}
