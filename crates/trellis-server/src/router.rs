//! Axum router setup for the trellis server

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    ServerState,
    handlers::{get_enhanced_graph, get_node_neighbors, health_check},
};

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Initial bounded-depth graph
        .route("/graph/enhanced", get(get_enhanced_graph))
        // Lazy one-hop disclosure; ids are paths, hence the wildcard
        .route("/graph/node/*id", get(get_node_neighbors))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
