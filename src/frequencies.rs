use std::{collections::HashMap, hash::Hash};

/// How often each distinct symbol occurs in an input sequence.
///
/// Symbols are kept in order of first appearance, so iterating a table built
/// from the same input always yields the same order. Tree construction relies
/// on this for reproducible tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequencies<S: Eq + Hash> {
    counts: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> Frequencies<S> {
    pub fn new() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol in `symbols`, in a single pass.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut frequencies = Self::new();
        for symbol in symbols {
            frequencies.add(symbol);
        }
        frequencies
    }

    /// Record one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.counts.len());
                self.counts.push((symbol, 1));
            }
        }
    }

    /// Occurrence count of `symbol`, or 0 if it never appeared.
    pub fn get(&self, symbol: &S) -> usize {
        self.index.get(symbol).map_or(0, |&i| self.counts[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// `(symbol, count)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.counts.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl<S: Eq + Hash + Clone> Default for Frequencies<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for Frequencies<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
