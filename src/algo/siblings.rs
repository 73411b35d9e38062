//! Sibling analysis: nodes sharing at least one parent.

use crate::graph::{AdjacencyMap, NodeId};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Distinct siblings of one node: the union of its parents' children,
/// minus the node itself. Duplicate children across shared parents
/// collapse in the set.
fn siblings_of(map: &AdjacencyMap, node: NodeId) -> u64 {
    let mut sibs = FxHashSet::default();
    for &parent in map.parents(node) {
        sibs.extend(map.children(parent).iter().copied());
    }
    sibs.remove(&node);
    sibs.len() as u64
}

/// Sibling counts for all nodes 1..=N, indexed by node id (slot 0 unused).
///
/// A node with no parents has no siblings.
pub fn sibling_counts(map: &AdjacencyMap) -> Vec<u64> {
    let mut counts = vec![0; map.node_count() + 1];
    for node in map.nodes() {
        counts[node as usize] = siblings_of(map, node);
    }
    counts
}

/// Parallel variant of [`sibling_counts`]; per-node unions are independent
/// reads of the shared adjacency.
pub fn sibling_counts_parallel(map: &AdjacencyMap) -> Vec<u64> {
    let mut counts = vec![0];
    counts.par_extend(
        (1..=map.node_count() as NodeId)
            .into_par_iter()
            .map(|node| siblings_of(map, node)),
    );
    counts
}
