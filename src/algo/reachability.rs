//! Reachability analysis: indirect descendant and ancestor counts.
//!
//! One breadth-first traversal per source node over the children adjacency,
//! with depth tracking. Every discovery is reported as a [`TraversalEvent`];
//! two reducers count the depth-≥2 events, once keyed by source (descendants)
//! and once keyed by target (ancestors). Because both reducers consume the
//! same event stream, `sum(indirect_descendants) == sum(indirect_ancestors)`
//! holds by construction.

use crate::graph::{AdjacencyMap, NodeId};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Minimum depth at which a reached node counts as an indirect relation.
pub const INDIRECT_DEPTH: u32 = 2;

/// One node discovery during a breadth-first reachability pass.
///
/// `depth` is the BFS depth of `target` relative to `source` (direct
/// children sit at depth 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalEvent {
    pub source: NodeId,
    pub target: NodeId,
    pub depth: u32,
}

/// Indirect relation counts for all nodes, indexed by node id (slot 0 unused).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndirectCounts {
    pub descendants: Vec<u64>,
    pub ancestors: Vec<u64>,
}

impl IndirectCounts {
    fn zeroed(node_count: usize) -> Self {
        IndirectCounts {
            descendants: vec![0; node_count + 1],
            ancestors: vec![0; node_count + 1],
        }
    }

    fn absorb(&mut self, event: TraversalEvent) {
        if event.depth >= INDIRECT_DEPTH {
            self.descendants[event.source as usize] += 1;
            self.ancestors[event.target as usize] += 1;
        }
    }

    fn merge(mut self, other: IndirectCounts) -> IndirectCounts {
        for (a, b) in self.descendants.iter_mut().zip(other.descendants) {
            *a += b;
        }
        for (a, b) in self.ancestors.iter_mut().zip(other.ancestors) {
            *a += b;
        }
        self
    }
}

/// Breadth-first traversal from `source` over children edges, reporting
/// every newly discovered node to `on_event`.
///
/// The visited set is seeded with the source, so each node is discovered at
/// most once per traversal. That bounds the walk on cyclic input and keeps
/// duplicate edges from inflating the event stream.
pub fn traverse_from<F>(map: &AdjacencyMap, source: NodeId, mut on_event: F)
where
    F: FnMut(TraversalEvent),
{
    let mut visited = FxHashSet::default();
    visited.insert(source);

    let mut queue = VecDeque::new();
    queue.push_back((source, 0u32));

    while let Some((current, depth)) = queue.pop_front() {
        for &next in map.children(current) {
            if visited.insert(next) {
                let next_depth = depth + 1;
                queue.push_back((next, next_depth));
                on_event(TraversalEvent {
                    source,
                    target: next,
                    depth: next_depth,
                });
            }
        }
    }
}

/// Run the reachability analysis for every node 1..=N, single-threaded.
pub fn analyze(map: &AdjacencyMap) -> IndirectCounts {
    let mut counts = IndirectCounts::zeroed(map.node_count());
    for source in map.nodes() {
        traverse_from(map, source, |event| counts.absorb(event));
    }
    counts
}

/// Parallel reachability analysis.
///
/// Traversals are independent reads of the shared adjacency; the shared
/// ancestor accumulator is resolved by summing per-thread partials instead
/// of contending on atomics. Produces the same counts as [`analyze`].
pub fn analyze_parallel(map: &AdjacencyMap) -> IndirectCounts {
    let node_count = map.node_count();
    (1..=node_count as NodeId)
        .into_par_iter()
        .fold(
            || IndirectCounts::zeroed(node_count),
            |mut counts, source| {
                traverse_from(map, source, |event| counts.absorb(event));
                counts
            },
        )
        .reduce(|| IndirectCounts::zeroed(node_count), IndirectCounts::merge)
}
