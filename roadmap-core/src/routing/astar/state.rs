use std::cmp::Ordering;

use fixedbitset::FixedBitSet;

use crate::{NodeIndex, SegmentIndex};

/// Frontier entry: a tentative arrival at `node`
#[derive(Copy, Clone, Debug)]
pub(super) struct FrontierEntry {
    pub(super) node: NodeIndex,
    /// Node and segment the search came from, `None` for the start
    pub(super) via: Option<(NodeIndex, SegmentIndex)>,
    pub(super) cost: f64,
    /// Cost so far plus heuristic estimate
    pub(super) priority: f64,
    /// Insertion counter, breaks priority ties first-in first-out
    pub(super) sequence: u64,
}

// Implement Ord for FrontierEntry to use in BinaryHeap
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority, then by insertion order (reversed for BinaryHeap)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Per-query search record, indexed by node.
///
/// Created fresh for every query so nothing leaks between searches.
#[derive(Debug)]
pub(super) struct SearchState {
    visited: FixedBitSet,
    predecessor: Vec<Option<(NodeIndex, SegmentIndex)>>,
    cost: Vec<f64>,
    settled: usize,
}

impl SearchState {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(node_count),
            predecessor: vec![None; node_count],
            cost: vec![f64::INFINITY; node_count],
            settled: 0,
        }
    }

    pub(super) fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.contains(node.index())
    }

    /// Marks `node` as visited with its final cost and predecessor
    pub(super) fn settle(
        &mut self,
        node: NodeIndex,
        via: Option<(NodeIndex, SegmentIndex)>,
        cost: f64,
    ) {
        self.visited.insert(node.index());
        self.predecessor[node.index()] = via;
        self.cost[node.index()] = cost;
        self.settled += 1;
    }

    pub(super) fn cost(&self, node: NodeIndex) -> f64 {
        self.cost[node.index()]
    }

    pub(super) fn settled(&self) -> usize {
        self.settled
    }

    /// Segments from the start to `goal`, following predecessor links back
    /// from a visited `goal` and reversing them
    pub(super) fn backtrack(&self, goal: NodeIndex) -> Vec<SegmentIndex> {
        let mut segments = Vec::new();
        let mut current = goal;
        while let Some((previous, segment)) = self.predecessor[current.index()] {
            segments.push(segment);
            current = previous;
        }
        segments.reverse();
        segments
    }
}
