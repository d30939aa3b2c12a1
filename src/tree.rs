mod min_queue;

use std::{fmt, hash::Hash};

use log::{debug, trace};

use self::min_queue::MinQueue;
use crate::frequencies::Frequencies;

/// A node of a Huffman tree.
///
/// Every internal node has exactly two children, and its weight is the sum of
/// theirs. Children are owned exclusively by their parent. There's no way to
/// mutate a tree once it's built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

/// Build the Huffman tree for `symbols`.
///
/// Return `None` for empty input. If there's only one distinct symbol, the
/// root is that symbol's leaf.
pub fn build_tree<S: Eq + Hash + Clone>(
    symbols: impl IntoIterator<Item = S>,
) -> Option<Node<S>> {
    let frequencies = Frequencies::from_symbols(symbols);
    debug!(
        "building tree: {} symbols, {} distinct",
        frequencies.total(),
        frequencies.len()
    );
    Node::from_frequencies(&frequencies)
}

impl<S: Clone> Node<S> {
    /// Build a tree from precomputed symbol counts.
    ///
    /// Lowest weights are merged first; the first node popped becomes the
    /// left child. Equal weights pop in insertion order, with leaves inserted
    /// in the order `frequencies` yields them, so the same input always gives
    /// the same tree.
    pub fn from_frequencies(frequencies: &Frequencies<S>) -> Option<Self>
    where
        S: Eq + Hash,
    {
        let mut queue: MinQueue<Node<S>, usize, _> = MinQueue::new(Node::weight);
        for (symbol, weight) in frequencies.iter() {
            queue.push(Node::Leaf {
                symbol: symbol.clone(),
                weight,
            });
        }

        loop {
            let left = queue.pop()?;
            let Some(right) = queue.pop() else {
                return Some(left);
            };

            trace!("merging weights {} + {}", left.weight(), right.weight());
            queue.push(Node::merge(left, right));
        }
    }
}

impl<S> Node<S> {
    fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Total count of the symbols below (or at) this node.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path, i.e. of the longest code.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, depth: usize, label: &str) -> fmt::Result
    where
        S: fmt::Debug,
    {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf { symbol, weight } => {
                writeln!(f, "{indent}{label}{symbol:?} ({weight})")
            }
            Node::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{indent}{label}* ({weight})")?;
                left.fmt_indented(f, depth + 1, "0: ")?;
                right.fmt_indented(f, depth + 1, "1: ")
            }
        }
    }
}

/// Renders the tree one node per line, children indented below their parent
/// and labelled with the digit of the branch leading to them.
impl<S: fmt::Debug> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0, "")
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn leaf(symbol: char, weight: usize) -> Node<char> {
        Node::Leaf { symbol, weight }
    }

    #[test]
    fn empty_input_has_no_tree() {
        assert_eq!(build_tree("".chars()), None);
    }

    #[test]
    fn single_symbol_is_a_bare_leaf() {
        let root = build_tree("AAAAA".chars()).unwrap();
        assert_eq!(root, leaf('A', 5));
        assert!(root.is_leaf());
        assert_eq!(root.depth(), 0);
    }

    #[test_case("AB")]
    #[test_case("ABCDABCC")]
    #[test_case("ABCDFGABD")]
    #[test_case("the quick brown fox jumps over the lazy dog")]
    fn weight_and_leaves_match_input(input: &str) {
        let root = build_tree(input.chars()).unwrap();
        let distinct = Frequencies::from_symbols(input.chars()).len();

        assert_eq!(root.weight(), input.chars().count());
        assert_eq!(root.leaf_count(), distinct);
        assert!(!root.is_leaf());
    }

    /// A:2 B:2 C:3 D:1. D and A merge first (A wins the tie with B by
    /// appearing earlier), then B and C, then the two subtrees.
    #[test]
    fn ties_break_by_first_appearance() {
        let root = build_tree("ABCDABCC".chars()).unwrap();

        let expected = Node::merge(
            Node::merge(leaf('D', 1), leaf('A', 2)),
            Node::merge(leaf('B', 2), leaf('C', 3)),
        );
        assert_eq!(root, expected);
        assert_eq!(root.weight(), 8);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn rebuilding_gives_the_same_tree() {
        let input = "mississippi river banks";
        let first = build_tree(input.chars());
        for _ in 0..10 {
            assert_eq!(build_tree(input.chars()), first);
        }
    }

    #[test]
    fn skewed_weights_give_a_deep_tree() {
        // Fibonacci-like counts force every merge to include the previous one.
        let input: Vec<u8> = [(b'a', 1), (b'b', 1), (b'c', 2), (b'd', 3), (b'e', 5)]
            .into_iter()
            .flat_map(|(symbol, count)| std::iter::repeat(symbol).take(count))
            .collect();

        let root = build_tree(input).unwrap();
        assert_eq!(root.depth(), 4);
        assert_eq!(root.weight(), 12);
    }

    #[test]
    fn display_shows_structure() {
        let root = build_tree("AAB".chars()).unwrap();
        let expected = "\
* (3)
  0: 'B' (1)
  1: 'A' (2)
";
        assert_eq!(root.to_string(), expected);
    }
}
