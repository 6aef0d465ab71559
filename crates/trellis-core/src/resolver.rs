//! One-hop neighbor resolution for lazy disclosure
//!
//! Resolves the direct neighbors of a single document: one node per
//! valid target (level 1, relative to the call) plus one edge from the
//! caller. A target's own links are read only to compute its
//! `has_children` flag — child tiers are never fetched recursively.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::index::DocumentIndex;
use crate::model::{GraphNode, NeighborEdge, NeighborGraph};

pub struct NeighborResolver<I> {
    index: I,
}

impl<I: DocumentIndex> NeighborResolver<I> {
    pub fn new(index: I) -> Self {
        NeighborResolver { index }
    }

    /// Resolve one hop of neighbors. A missing document, or one with
    /// no content, yields an empty result rather than an error.
    pub fn resolve(&self, id: &str) -> Result<NeighborGraph, GraphError> {
        let Some(links) = self.index.outbound_links(id)? else {
            return Ok(NeighborGraph::default());
        };

        let documents = self.index.documents()?;
        let labels: HashMap<&str, &str> = documents
            .iter()
            .map(|d| (d.id.as_str(), d.label.as_str()))
            .collect();

        let mut result = NeighborGraph::default();
        let mut seen = std::collections::HashSet::new();
        for target in links {
            if target == id || !seen.insert(target.clone()) {
                continue;
            }
            let Some(&label) = labels.get(target.as_str()) else {
                continue;
            };

            // The target's own links, solely for the disclosure
            // affordance on its node.
            let child_links = self.index.outbound_links(&target)?.unwrap_or_default();
            let child_count = child_links
                .iter()
                .filter(|t| *t != &target && labels.contains_key(t.as_str()))
                .count();

            result.nodes.push(GraphNode {
                id: target.clone(),
                label: label.to_string(),
                level: 1,
                link_count: child_count,
                has_children: child_count > 0,
            });
            result.edges.push(NeighborEdge {
                from: id.to_string(),
                to: target,
            });
        }

        tracing::debug!(id, neighbors = result.nodes.len(), "resolved neighbors");
        Ok(result)
    }
}
