//! Lineage — graph-relation classifier
//!
//! Given directed parent→child edges over integer-labeled nodes, computes
//! for every node 1..=N five relation counts: direct children, direct
//! parents, indirect descendants (reachable via children at depth ≥ 2),
//! indirect ancestors (the dual view) and siblings (distinct other nodes
//! sharing at least one parent).
//!
//! # Architecture
//!
//! Three dependency-ordered stages:
//! - [`graph`] builds the bidirectional adjacency once from the edge list;
//!   it is read-only for the rest of the run.
//! - [`algo`] holds the two analyzers: per-source breadth-first
//!   reachability with depth tracking, and sibling-set unions. They are
//!   independent and both have a rayon-parallel variant.
//! - [`engine`] orchestrates the stages and merges the results into one
//!   [`RelationCounts`] record per node, ordered by node id.
//!
//! [`io`] is the thin collaborator around the core: CSV/TSV edge-list
//! parsing and comma-joined output.
//!
//! # Example
//!
//! ```rust
//! use lineage::{Edge, RelationEngine};
//!
//! let edges = [
//!     Edge::new(1, 2),
//!     Edge::new(1, 3),
//!     Edge::new(2, 4),
//!     Edge::new(3, 4),
//! ];
//!
//! let records = RelationEngine::from_edges(&edges).compute();
//!
//! // Node 1 has two direct children and reaches node 4 at depth 2.
//! assert_eq!(records[0].direct_children, 2);
//! assert_eq!(records[0].indirect_descendants, 1);
//!
//! // Nodes 2 and 3 are each other's siblings via parent 1.
//! assert_eq!(records[1].siblings, 1);
//! assert_eq!(records[2].siblings, 1);
//! ```

pub mod algo;
pub mod engine;
pub mod graph;
pub mod io;

pub use engine::{RelationCounts, RelationEngine};
pub use graph::{AdjacencyMap, Edge, NodeId};
pub use io::{InputError, InputResult};

/// Crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
