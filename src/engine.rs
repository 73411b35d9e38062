//! Relation engine: builds the adjacency once, runs both analyzers over it
//! and merges everything into one record per node.

use crate::algo::{reachability, siblings};
use crate::graph::{AdjacencyMap, Edge, NodeId};
use serde::Serialize;
use tracing::debug;

/// The five relation counts for one node, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationCounts {
    pub node: NodeId,
    /// Raw children-list length; duplicate edges count twice.
    pub direct_children: u64,
    /// Raw parents-list length; a node with parallel incoming edges
    /// reports more than 1 here.
    pub direct_parents: u64,
    /// Nodes reachable via children edges at depth >= 2.
    pub indirect_descendants: u64,
    /// Nodes from which this one is an indirect descendant.
    pub indirect_ancestors: u64,
    /// Distinct other nodes sharing at least one parent.
    pub siblings: u64,
}

/// One-shot classifier over a parent→child edge list.
///
/// Owns the [`AdjacencyMap`] for the duration of a run; the map is built in
/// the constructor and never mutated afterwards, so [`compute`] and
/// [`compute_parallel`] may be called any number of times and always agree.
///
/// [`compute`]: RelationEngine::compute
/// [`compute_parallel`]: RelationEngine::compute_parallel
pub struct RelationEngine {
    map: AdjacencyMap,
}

impl RelationEngine {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let map = AdjacencyMap::from_edges(edges);
        debug!(
            nodes = map.node_count(),
            edges = map.edge_count(),
            "adjacency built"
        );
        RelationEngine { map }
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.map
    }

    /// Classify every node 1..=N, single-threaded.
    pub fn compute(&self) -> Vec<RelationCounts> {
        let indirect = reachability::analyze(&self.map);
        let sibs = siblings::sibling_counts(&self.map);
        self.merge(indirect, sibs)
    }

    /// Classify every node 1..=N with the traversals spread across the
    /// rayon pool. Identical output to [`compute`](RelationEngine::compute).
    pub fn compute_parallel(&self) -> Vec<RelationCounts> {
        let indirect = reachability::analyze_parallel(&self.map);
        let sibs = siblings::sibling_counts_parallel(&self.map);
        self.merge(indirect, sibs)
    }

    fn merge(
        &self,
        indirect: reachability::IndirectCounts,
        sibs: Vec<u64>,
    ) -> Vec<RelationCounts> {
        let records: Vec<RelationCounts> = self
            .map
            .nodes()
            .map(|node| RelationCounts {
                node,
                direct_children: self.map.out_degree(node) as u64,
                direct_parents: self.map.in_degree(node) as u64,
                indirect_descendants: indirect.descendants[node as usize],
                indirect_ancestors: indirect.ancestors[node as usize],
                siblings: sibs[node as usize],
            })
            .collect();

        debug_assert_eq!(
            records.iter().map(|r| r.indirect_descendants).sum::<u64>(),
            records.iter().map(|r| r.indirect_ancestors).sum::<u64>(),
            "descendant and ancestor totals are two views of one event stream"
        );

        debug!(records = records.len(), "classification complete");
        records
    }
}
