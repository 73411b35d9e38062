//! Graph primitives: node identifiers, edges and the adjacency structure
//! shared by every analyzer.

pub mod adjacency;

pub use adjacency::{AdjacencyMap, Edge, NodeId};
