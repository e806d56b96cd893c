//! Min-ordered worklist for Dijkstra
//!
//! Entries with equal distance pop in insertion order. Several entries for
//! the same node may coexist; the engine discards the superseded ones when
//! they surface, so there is no decrease-key.

use crate::graph::types::{Distance, NodeId};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by (distance, insertion sequence)
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub distance: Distance,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, distance: Distance) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            node,
            distance,
            seq,
        }));
    }

    /// Remove and return the entry with the smallest distance
    pub fn pop_min(&mut self) -> Option<(NodeId, Distance)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.distance))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
