//! HTTP server for the trellis graph endpoints

pub mod handlers;
pub mod router;

use std::sync::Arc;

use tokio::net::TcpListener;
use trellis_core::{DocumentIndex, TopLevelThresholds};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Shared state for all request handlers. The index is read-only;
/// every request computes over the snapshot the store presents, so
/// any number of requests may run concurrently.
pub struct ServerState {
    pub index: Arc<dyn DocumentIndex>,
    pub thresholds: TopLevelThresholds,
    /// Depth used by `/graph/enhanced` when the query omits one.
    pub default_depth: u32,
}

impl ServerState {
    pub fn new(index: Arc<dyn DocumentIndex>) -> Self {
        ServerState {
            index,
            thresholds: TopLevelThresholds::default(),
            default_depth: 2,
        }
    }

    pub fn with_graph_settings(
        index: Arc<dyn DocumentIndex>,
        thresholds: TopLevelThresholds,
        default_depth: u32,
    ) -> Self {
        ServerState {
            index,
            thresholds,
            default_depth,
        }
    }
}

/// The trellis HTTP server
pub struct TrellisServer {
    state: Arc<ServerState>,
    config: ServerConfig,
}

impl TrellisServer {
    pub fn new(state: ServerState, config: ServerConfig) -> Self {
        TrellisServer {
            state: Arc::new(state),
            config,
        }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let app = router::create_router(self.state);
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("listening on http://{}", listener.local_addr()?);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
