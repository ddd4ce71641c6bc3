use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry, ordered by `(f, seq)` so equal-`f` cells pop in insertion
/// order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of the search: a min-priority queue plus a membership table.
///
/// Each member cell has exactly one live heap entry, identified by its
/// sequence number. Lowering a member's priority pushes a fresh entry and
/// retires the old one, which is skipped when it surfaces.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    live: Vec<Option<u64>>,
    next_seq: u64,
    len: usize,
}

impl Frontier {
    /// Empty the frontier and size the membership table for `len` cells.
    /// Sequence numbers restart at zero.
    pub fn reset(&mut self, len: usize) {
        self.heap.clear();
        self.live.clear();
        self.live.resize(len, None);
        self.next_seq = 0;
        self.len = 0;
    }

    /// Number of member cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.live[idx].is_some()
    }

    /// Add a non-member cell with priority `f`. Returns the sequence number
    /// it was given.
    pub fn insert(&mut self, idx: usize, f: i32) -> u64 {
        debug_assert!(!self.contains(idx), "cell {idx} already in frontier");
        self.len += 1;
        self.push_entry(idx, f)
    }

    /// Move a member cell to a new, lower priority `f`.
    pub fn reprioritize(&mut self, idx: usize, f: i32) -> u64 {
        debug_assert!(self.contains(idx), "cell {idx} not in frontier");
        self.push_entry(idx, f)
    }

    fn push_entry(&mut self, idx: usize, f: i32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live[idx] = Some(seq);
        self.heap.push(Entry { f, seq, idx });
        seq
    }

    /// Remove and return the member with the lowest `(f, seq)`.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            // Skip retired entries.
            if self.live[e.idx] != Some(e.seq) {
                continue;
            }
            self.live[e.idx] = None;
            self.len -= 1;
            return Some(e.idx);
        }
        None
    }
}
