use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

/// Frontier entry. Lower primary priority wins, then lower secondary,
/// then insertion order, which keeps equal priorities FIFO.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub primary: f64,
    pub secondary: f64,
    seq: u64,
    pub node: NodeIndex,
    /// Accumulated path cost at push time, for stale-entry detection
    pub cost: f64,
}

// Min-heap ordering (reversed from the standard max-heap)
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .primary
            .total_cmp(&self.primary)
            .then_with(|| other.secondary.total_cmp(&self.secondary))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority frontier with deterministic tie-breaking
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier::default()
    }

    pub fn push(&mut self, primary: f64, secondary: f64, node: NodeIndex, cost: f64) {
        self.heap.push(Entry {
            primary,
            secondary,
            seq: self.seq,
            node,
            cost,
        });
        self.seq += 1;
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
