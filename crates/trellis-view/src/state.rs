//! The incremental-disclosure state machine
//!
//! Per document identifier the state is derived, never stored: in
//! neither set means collapsed, in the temporary set means previewing,
//! in the expanded set means pinned (temporary membership is
//! irrelevant once expanded). Fetches run outside the lock, so every
//! result is reconciled against the membership that holds when it
//! resolves, not when it was triggered — a preview that ended while
//! its fetch was in flight is simply discarded.

use std::collections::{HashMap, HashSet};

use tokio::sync::Mutex;
use trellis_core::NeighborGraph;

use crate::client::{CachedNeighborClient, NeighborSource};
use crate::surface::{RenderSurface, SurfaceEdge, SurfaceNode};

/// Disclosure state of one document, derived from set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    Collapsed,
    Previewing,
    Expanded,
}

type PreviewCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Everything the machine mutates, behind one lock. The lock is never
/// held across an await.
struct View<R> {
    surface: R,
    /// Identifiers with an active preview.
    temporary: HashSet<String>,
    /// Identifiers pinned by a click.
    expanded: HashSet<String>,
    /// Mirror of the surface's node set: id → temporary tag.
    node_tags: HashMap<String, bool>,
    /// Mirror of the surface's edge set: (from, to) → temporary tag.
    edge_tags: HashMap<(String, String), bool>,
}

impl<R: RenderSurface> View<R> {
    /// Merge a fetch result into the surface. Upserts are idempotent
    /// by identifier and pinned always wins: a temporary upsert never
    /// touches an element that is already present, while a pinned
    /// upsert promotes a temporary element in place.
    fn merge(&mut self, result: &NeighborGraph, temporary: bool) {
        for node in &result.nodes {
            match self.node_tags.get(&node.id).copied() {
                Some(false) => continue,
                Some(true) if temporary => continue,
                _ => {}
            }
            self.surface.upsert_node(SurfaceNode {
                id: node.id.clone(),
                label: node.label.clone(),
                temporary,
                has_children: node.has_children,
                link_count: node.link_count,
            });
            self.node_tags.insert(node.id.clone(), temporary);
        }
        for edge in &result.edges {
            let key = (edge.from.clone(), edge.to.clone());
            match self.edge_tags.get(&key).copied() {
                Some(false) => continue,
                Some(true) if temporary => continue,
                _ => {}
            }
            self.surface.upsert_edge(SurfaceEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                temporary,
            });
            self.edge_tags.insert(key, temporary);
        }
    }

    /// Remove every temporary-tagged element whose identifier is not
    /// pinned, then clear the temporary set. Expansion takes
    /// precedence: a previewed node that was since pinned survives.
    fn teardown_previews(&mut self) {
        let doomed: Vec<String> = self
            .node_tags
            .iter()
            .filter(|(id, temp)| **temp && !self.expanded.contains(id.as_str()))
            .map(|(id, _)| id.clone())
            .collect();
        for id in doomed {
            self.surface.remove_node(&id);
            self.node_tags.remove(&id);
        }

        let doomed_edges: Vec<(String, String)> = self
            .edge_tags
            .iter()
            .filter(|(_, temp)| **temp)
            .map(|(key, _)| key.clone())
            .collect();
        for (from, to) in doomed_edges {
            self.surface.remove_edge(&from, &to);
            self.edge_tags.remove(&(from, to));
        }

        self.temporary.clear();
    }
}

/// The client graph state machine. Takes the rendering surface and the
/// neighbor source as injected dependencies; construction is the
/// readiness signal.
pub struct GraphExplorer<R, S> {
    view: Mutex<View<R>>,
    client: CachedNeighborClient<S>,
    on_preview: Option<PreviewCallback>,
}

impl<R: RenderSurface, S: NeighborSource> GraphExplorer<R, S> {
    pub fn new(surface: R, source: S) -> Self {
        GraphExplorer {
            view: Mutex::new(View {
                surface,
                temporary: HashSet::new(),
                expanded: HashSet::new(),
                node_tags: HashMap::new(),
                edge_tags: HashMap::new(),
            }),
            client: CachedNeighborClient::new(source),
            on_preview: None,
        }
    }

    /// Register the content-preview side effect fired on every click.
    pub fn with_preview_callback(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_preview = Some(Box::new(callback));
        self
    }

    /// The session neighbor cache, exposed so a host reacting to
    /// document-change notifications can `reset` it.
    pub fn cache(&self) -> &CachedNeighborClient<S> {
        &self.client
    }

    pub async fn state_of(&self, id: &str) -> DisclosureState {
        let view = self.view.lock().await;
        if view.expanded.contains(id) {
            DisclosureState::Expanded
        } else if view.temporary.contains(id) {
            DisclosureState::Previewing
        } else {
            DisclosureState::Collapsed
        }
    }

    /// Preview the neighbors of `id`. No-op when `id` is already
    /// expanded; its neighbors are pinned and must not be re-tagged.
    pub async fn on_hover_start(&self, id: &str) {
        {
            let mut view = self.view.lock().await;
            if view.expanded.contains(id) {
                return;
            }
            // Mark the preview at trigger time so a hover-end racing
            // the fetch is observable below.
            view.temporary.insert(id.to_string());
        }

        let result = self.client.fetch(id).await;

        let mut view = self.view.lock().await;
        if !view.temporary.contains(id) && !view.expanded.contains(id) {
            tracing::debug!(id, "preview ended before fetch resolved, discarding");
            return;
        }
        if result.is_empty() {
            view.temporary.remove(id);
            return;
        }
        view.merge(&result, true);
    }

    /// End the current preview, removing every unpinned temporary
    /// element from the surface.
    pub async fn on_hover_end(&self) {
        self.view.lock().await.teardown_previews();
    }

    /// Pin the neighbors of `id`, or collapse `id` when it is already
    /// pinned. Either way the content-preview callback fires.
    pub async fn on_click(&self, id: &str) {
        let pinned = {
            let mut view = self.view.lock().await;
            if view.expanded.remove(id) {
                view.teardown_previews();
                false
            } else {
                // Pin at trigger time: a hover-end arriving while the
                // fetch is in flight must not cancel the expansion.
                view.expanded.insert(id.to_string());
                true
            }
        };

        if pinned {
            let result = self.client.fetch(id).await;
            let mut view = self.view.lock().await;
            // A second click may have collapsed `id` in the meantime.
            if view.expanded.contains(id) {
                view.merge(&result, false);
            } else {
                tracing::debug!(id, "expansion collapsed before fetch resolved, discarding");
            }
        }

        if let Some(callback) = &self.on_preview {
            callback(id);
        }
    }
}
