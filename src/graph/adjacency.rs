//! Bidirectional adjacency structure over parent→child edges.
//!
//! Built once from an edge list, read-only for the rest of the run. Node
//! identifiers are dense integers in `1..=N` where N is the largest id seen
//! in any edge, so the per-node vectors are indexed by id directly (slot 0
//! is allocated but never used).

/// Node identifier type. Valid ids start at 1.
pub type NodeId = u32;

/// A directed parent→child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
}

impl Edge {
    pub fn new(parent: NodeId, child: NodeId) -> Self {
        Edge { parent, child }
    }
}

/// Dense, integer-indexed view of the graph topology.
///
/// Two mirrored adjacency lists: `children[p]` holds every child of `p` and
/// `parents[c]` every parent of `c`, in input order. Edges are NOT
/// deduplicated — a repeated edge appears twice in both lists, which is the
/// contract the direct-relation counts are defined against.
pub struct AdjacencyMap {
    node_count: usize,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Vec<NodeId>>,
}

impl AdjacencyMap {
    /// Build the adjacency lists from an edge sequence.
    ///
    /// N is inferred as the maximum id on either side of any edge; an empty
    /// input yields N = 0 and empty maps.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let max_id = edges
            .iter()
            .map(|e| e.parent.max(e.child))
            .max()
            .unwrap_or(0) as usize;

        let mut children = vec![Vec::new(); max_id + 1];
        let mut parents = vec![Vec::new(); max_id + 1];

        for e in edges {
            children[e.parent as usize].push(e.child);
            parents[e.child as usize].push(e.parent);
        }

        AdjacencyMap {
            node_count: max_id,
            children,
            parents,
        }
    }

    /// Number of nodes N (ids run 1..=N).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Iterate all node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        1..=self.node_count as NodeId
    }

    /// Children of `node`, in input order, with multiplicity.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.children[node as usize]
    }

    /// Parents of `node`, in input order, with multiplicity.
    pub fn parents(&self, node: NodeId) -> &[NodeId] {
        &self.parents[node as usize]
    }

    /// Out-degree: raw children-list length (duplicates counted).
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.children[node as usize].len()
    }

    /// In-degree: raw parents-list length (duplicates counted).
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.parents[node as usize].len()
    }

    /// Total number of edges (with multiplicity).
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }
}
