//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use trellis_core::GraphBuilder;
use trellis_server::{ServerConfig, ServerState, TrellisServer};
use trellis_store::{Config, NoteStore};

/// Resolve config file + CLI overrides into a usable configuration.
fn load_config(config_path: PathBuf, notes_dir: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::load(&config_path)?;
    if let Some(notes_dir) = notes_dir {
        config.storage.notes_dir = notes_dir;
    }
    Ok(config)
}

pub async fn serve(
    config_path: PathBuf,
    notes_dir: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let config = load_config(config_path, notes_dir)?;
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    tracing::info!("Trellis v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Notes directory: {}", config.storage.notes_dir.display());

    let store = Arc::new(NoteStore::new(config.storage.notes_dir));
    let state = ServerState::with_graph_settings(
        store,
        config.graph.thresholds(),
        config.graph.default_depth,
    );
    let server = TrellisServer::new(state, ServerConfig { host, port });
    server.start().await
}

pub fn build(
    config_path: PathBuf,
    notes_dir: Option<PathBuf>,
    depth: Option<u32>,
) -> anyhow::Result<()> {
    let config = load_config(config_path, notes_dir)?;
    let depth = depth.unwrap_or(config.graph.default_depth);

    let store = NoteStore::new(config.storage.notes_dir);
    let builder = GraphBuilder::with_thresholds(store, config.graph.thresholds());
    let graph = builder.build(depth)?;

    tracing::info!(
        "Built graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}
