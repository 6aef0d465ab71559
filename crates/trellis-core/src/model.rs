//! Core data structures for the document graph

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A document as the index enumerates it: stable identifier, display
/// label, and the containment group it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Stable string key, e.g. a relative path.
    pub id: String,
    pub label: String,
    /// Containment group; the empty string denotes root-level.
    pub group: String,
}

impl DocumentMeta {
    /// A document sits at the root when its group is empty.
    pub fn is_root(&self) -> bool {
        self.group.is_empty()
    }
}

/// A single node in a graph response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Disclosure level: 0 for top-level, 1 for children. Relative to
    /// the call for neighbor resolution.
    pub level: u32,
    /// Count of outbound references after filtering unknown targets
    /// and self-references.
    pub link_count: usize,
    /// Whether the document has further neighbors to disclose.
    pub has_children: bool,
}

/// A directed edge in the initial graph, tagged with the disclosure
/// level it was emitted at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub level: u32,
}

/// A directed edge in a neighbor-resolution response. Carries no level
/// tag on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborEdge {
    pub from: String,
    pub to: String,
}

/// Parent/child bookkeeping for one node of the initial graph. Built
/// fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub children: Vec<String>,
    pub parent: Option<String>,
    pub level: u32,
}

/// The `/graph/enhanced` payload: bounded-depth initial graph rooted
/// at the top-level document set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Keyed by node id. Ordered map so repeated builds serialize
    /// byte-identically.
    pub hierarchy: BTreeMap<String, HierarchyEntry>,
}

impl DocumentGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// One hop of neighbors for a single document. Also the unit the
/// client caches per identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<NeighborEdge>,
}

impl NeighborGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
