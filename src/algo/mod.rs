//! Relation analyzers over a read-only [`AdjacencyMap`](crate::graph::AdjacencyMap).
//!
//! The two analyzers are independent of each other and only read the shared
//! adjacency, so they may run in either order or in parallel.

pub mod reachability;
pub mod siblings;

pub use reachability::{IndirectCounts, TraversalEvent, INDIRECT_DEPTH};
pub use siblings::{sibling_counts, sibling_counts_parallel};
