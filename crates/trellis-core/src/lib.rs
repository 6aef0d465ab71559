//! Trellis Core — document graph model, top-level classification, and
//! one-hop neighbor resolution

pub mod builder;
pub mod error;
pub mod index;
pub mod model;
pub mod resolver;


#[cfg(test)]
pub mod test_utils;

pub use builder::{GraphBuilder, TopLevelThresholds};
pub use error::GraphError;
pub use index::{DocumentIndex, IndexError};
pub use model::{
    DocumentGraph, DocumentMeta, GraphEdge, GraphNode, HierarchyEntry, NeighborEdge, NeighborGraph,
};
pub use resolver::NeighborResolver;
