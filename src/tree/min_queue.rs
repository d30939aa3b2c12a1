use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// A min-priority queue ordered by a caller-supplied key.
///
/// Items with equal keys come out in the order they went in (FIFO), so the
/// pop order is fully determined by the sequence of pushes.
pub(crate) struct MinQueue<T, K, F> {
    heap: BinaryHeap<Reverse<Entry<T, K>>>,
    key: F,
    next_seq: u64,
}

struct Entry<T, K> {
    key: K,
    seq: u64,
    item: T,
}

impl<T, K: Ord, F: Fn(&T) -> K> MinQueue<T, K, F> {
    pub fn new(key: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { key, seq, item }));
    }

    /// Remove the item with the smallest key; among equal keys, the oldest.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }
}

// Only (key, seq) take part in the ordering; the item itself never does.
impl<T, K: Ord> Ord for Entry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.key, self.seq).cmp(&(&other.key, other.seq))
    }
}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> PartialEq for Entry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for Entry<T, K> {}
