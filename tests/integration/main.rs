//! Integration tests for Trellis
//!
//! These tests verify that the store, builder, resolver, and server
//! work together over a real notes directory.

use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use trellis_core::{DocumentIndex, GraphBuilder, NeighborGraph, NeighborResolver};
use trellis_server::{ServerConfig, ServerState, TrellisServer};
use trellis_store::NoteStore;
use trellis_view::{
    DisclosureState, FetchError, GraphExplorer, NeighborSource, RenderSurface, SurfaceEdge,
    SurfaceNode,
};

/// A small vault: one root index, a couple of leaves, one nested note.
fn sample_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("areas")).unwrap();
    fs::write(
        root.join("Home.md"),
        "Start here: [[Inbox]], [[areas/Health]], [[Reading]]\n",
    )
    .unwrap();
    fs::write(root.join("Inbox.md"), "Capture. See [[Home]].\n").unwrap();
    fs::write(root.join("Reading.md"), "Current book notes.\n").unwrap();
    fs::write(root.join("areas/Health.md"), "[[Reading]] before bed.\n").unwrap();
    dir
}

#[test]
fn store_through_builder_end_to_end() {
    let vault = sample_vault();
    let store = NoteStore::new(vault.path());
    let graph = GraphBuilder::new(store).build(2).unwrap();

    // Home is a root note; so are Inbox and Reading. Health sits in a
    // folder with one outbound link, so it only appears as a child.
    let top: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.level == 0)
        .map(|n| n.id.as_str())
        .collect();
    assert!(top.contains(&"Home"));
    assert!(!top.contains(&"areas/Health"));

    let health = graph.nodes.iter().find(|n| n.id == "areas/Health").unwrap();
    assert_eq!(health.level, 1);
    assert!(health.has_children);

    let ids: std::collections::HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &graph.edges {
        assert!(ids.contains(edge.from.as_str()));
        assert!(ids.contains(edge.to.as_str()));
    }

    assert_eq!(graph.hierarchy["areas/Health"].parent.as_deref(), Some("Home"));
}

#[test]
fn store_through_resolver_end_to_end() {
    let vault = sample_vault();
    let store = NoteStore::new(vault.path());
    let resolver = NeighborResolver::new(store);

    let neighbors = resolver.resolve("areas/Health").unwrap();
    assert_eq!(neighbors.nodes.len(), 1);
    assert_eq!(neighbors.nodes[0].id, "Reading");
    assert_eq!(neighbors.edges[0].from, "areas/Health");

    assert!(resolver.resolve("missing-id").unwrap().is_empty());
}

#[test]
fn rebuild_is_byte_identical() {
    let vault = sample_vault();
    let store = NoteStore::new(vault.path());
    let first = GraphBuilder::new(&store).build(2).unwrap();
    let second = GraphBuilder::new(&store).build(2).unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

/// In-process neighbor source: the resolver running straight over the
/// note store, as an embedded host would wire it.
struct ResolverSource(NoteStore);

#[async_trait]
impl NeighborSource for ResolverSource {
    async fn neighbors(&self, id: &str) -> Result<NeighborGraph, FetchError> {
        NeighborResolver::new(&self.0)
            .resolve(id)
            .map_err(|e| FetchError::Fetch(e.to_string()))
    }
}

#[derive(Clone, Default)]
struct MapSurface(Arc<Mutex<HashMap<String, bool>>>);

impl RenderSurface for MapSurface {
    fn upsert_node(&mut self, node: SurfaceNode) {
        self.0.lock().unwrap().insert(node.id, node.temporary);
    }

    fn upsert_edge(&mut self, _edge: SurfaceEdge) {}

    fn remove_node(&mut self, id: &str) {
        self.0.lock().unwrap().remove(id);
    }

    fn remove_edge(&mut self, _from: &str, _to: &str) {}
}

#[tokio::test]
async fn explorer_over_a_store_end_to_end() {
    let vault = sample_vault();
    let surface = MapSurface::default();
    let explorer = GraphExplorer::new(
        surface.clone(),
        ResolverSource(NoteStore::new(vault.path())),
    );

    // Preview, then end it: the previewed neighbors must all be gone.
    explorer.on_hover_start("Home").await;
    assert_eq!(surface.0.lock().unwrap().len(), 3);
    explorer.on_hover_end().await;
    assert!(surface.0.lock().unwrap().is_empty());

    // Pin, then preview a note whose neighbor is already pinned:
    // the pinned element wins and survives the teardown.
    explorer.on_click("Home").await;
    explorer.on_hover_start("areas/Health").await;
    explorer.on_hover_end().await;

    assert_eq!(explorer.state_of("Home").await, DisclosureState::Expanded);
    let placed = surface.0.lock().unwrap();
    assert_eq!(placed.len(), 3);
    assert!(placed.values().all(|temporary| !temporary));
}

#[tokio::test]
async fn server_construction_over_a_store() {
    let vault = sample_vault();
    let store: Arc<NoteStore> = Arc::new(NoteStore::new(vault.path()));
    let state = ServerState::new(store.clone());
    assert_eq!(state.index.documents().unwrap().len(), 4);

    let server = TrellisServer::new(
        state,
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    );
    assert_eq!(server.state().default_depth, 2);
}
