//! Initial graph construction
//!
//! Builds the bounded-depth graph served to a fresh view: classifies
//! top-level documents (root group or hub heuristic), then emits
//! level-0 nodes/edges and one level of children. Pure over the index
//! snapshot — rebuilding on the same input yields identical output.

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::index::DocumentIndex;
use crate::model::{DocumentGraph, GraphEdge, GraphNode, HierarchyEntry};

/// Hub classification thresholds: a non-root document is promoted to
/// the top level when it has at least `min_outbound` references and at
/// most `max_inbound` referrers. Heavily-referenced documents (likely
/// glossary/utility pages) stay below the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLevelThresholds {
    pub min_outbound: usize,
    pub max_inbound: usize,
}

impl Default for TopLevelThresholds {
    fn default() -> Self {
        TopLevelThresholds {
            min_outbound: 3,
            max_inbound: 2,
        }
    }
}

/// Builds the initial graph from a document index.
pub struct GraphBuilder<I> {
    index: I,
    thresholds: TopLevelThresholds,
}

impl<I: DocumentIndex> GraphBuilder<I> {
    pub fn new(index: I) -> Self {
        GraphBuilder {
            index,
            thresholds: TopLevelThresholds::default(),
        }
    }

    pub fn with_thresholds(index: I, thresholds: TopLevelThresholds) -> Self {
        GraphBuilder { index, thresholds }
    }

    /// Build the initial graph. `max_depth` bounds disclosure: 1 emits
    /// only the top-level tier, anything above adds one tier of
    /// children (deeper tiers are fetched lazily by the client).
    pub fn build(&self, max_depth: u32) -> Result<DocumentGraph, GraphError> {
        let documents = self.index.documents()?;

        // Pass one: resolve every document's reference list, dropping
        // targets that don't exist as documents and self-references.
        let known: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        let mut refs: HashMap<&str, Vec<String>> = HashMap::new();
        for doc in &documents {
            let raw = self.index.outbound_links(&doc.id)?.unwrap_or_default();
            let filtered: Vec<String> = raw
                .into_iter()
                .filter(|target| target != &doc.id && known.contains(target.as_str()))
                .collect();
            refs.insert(&doc.id, filtered);
        }

        // Pass two: inbound counts over the filtered lists.
        let mut inbound: HashMap<&str, usize> = documents.iter().map(|d| (d.id.as_str(), 0)).collect();
        for doc in &documents {
            for target in &refs[doc.id.as_str()] {
                if let Some(count) = inbound.get_mut(target.as_str()) {
                    *count += 1;
                }
            }
        }

        // Classify top-level documents: root group, or hub rule.
        // Document order is preserved so output is deterministic.
        let mut top_level: Vec<&str> = documents
            .iter()
            .filter(|doc| {
                doc.is_root()
                    || (refs[doc.id.as_str()].len() >= self.thresholds.min_outbound
                        && inbound[doc.id.as_str()] <= self.thresholds.max_inbound)
            })
            .map(|doc| doc.id.as_str())
            .collect();

        // Fallback: nothing classified, take the root group wholesale.
        // If that is empty too the result is an empty graph.
        if top_level.is_empty() {
            top_level = documents
                .iter()
                .filter(|doc| doc.is_root())
                .map(|doc| doc.id.as_str())
                .collect();
        }
        let top_set: HashSet<&str> = top_level.iter().copied().collect();

        let labels: HashMap<&str, &str> = documents
            .iter()
            .map(|d| (d.id.as_str(), d.label.as_str()))
            .collect();

        let mut graph = DocumentGraph::default();
        let mut emitted: HashSet<&str> = HashSet::new();

        // Level 0: one node and hierarchy entry per top-level id.
        for &id in &top_level {
            if !emitted.insert(id) {
                continue;
            }
            graph.nodes.push(GraphNode {
                id: id.to_string(),
                label: labels[id].to_string(),
                level: 0,
                link_count: refs[id].len(),
                has_children: !refs[id].is_empty(),
            });
            graph.hierarchy.insert(
                id.to_string(),
                HierarchyEntry {
                    children: refs[id].clone(),
                    parent: None,
                    level: 0,
                },
            );
        }

        // Edges out of the top level, and one tier of child nodes when
        // the depth budget allows. First writer wins on child nodes and
        // hierarchy entries reached from more than one parent.
        for &id in &top_level {
            for target in &refs[id] {
                graph.edges.push(GraphEdge {
                    from: id.to_string(),
                    to: target.clone(),
                    level: 0,
                });

                if max_depth > 1 && !top_set.contains(target.as_str()) {
                    let target = target.as_str();
                    if emitted.insert(target) {
                        graph.nodes.push(GraphNode {
                            id: target.to_string(),
                            label: labels[target].to_string(),
                            level: 1,
                            link_count: refs[target].len(),
                            has_children: !refs[target].is_empty(),
                        });
                    }
                    if !graph.hierarchy.contains_key(target) {
                        graph.hierarchy.insert(
                            target.to_string(),
                            HierarchyEntry {
                                children: refs[target].clone(),
                                parent: Some(id.to_string()),
                                level: 1,
                            },
                        );
                    }
                }
            }
        }

        tracing::debug!(
            top_level = top_level.len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built initial graph"
        );
        Ok(graph)
    }
}
