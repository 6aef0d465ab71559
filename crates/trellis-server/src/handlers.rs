//! REST API handlers for the trellis server

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use trellis_core::{
    DocumentGraph, GraphBuilder, GraphError, NeighborGraph, NeighborResolver,
};

use crate::ServerState;

/// Internal failure surfaced as a single 500 with a human-readable
/// detail. A partially-built graph is never returned.
#[derive(Debug)]
pub struct ApiError(GraphError);

impl From<GraphError> for ApiError {
    fn from(e: GraphError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "graph request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    pub depth: Option<u32>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /graph/enhanced?depth=<int>` — the bounded-depth initial graph.
pub async fn get_enhanced_graph(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<DocumentGraph>, ApiError> {
    let depth = query.depth.unwrap_or(state.default_depth);
    let builder = GraphBuilder::with_thresholds(Arc::clone(&state.index), state.thresholds);
    let graph = builder.build(depth)?;
    Ok(Json(graph))
}

/// `GET /graph/node/<id>` — one hop of neighbors for lazy disclosure.
/// The identifier is a path and may contain separators.
pub async fn get_node_neighbors(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<NeighborGraph>, ApiError> {
    let resolver = NeighborResolver::new(Arc::clone(&state.index));
    let neighbors = resolver.resolve(&id)?;
    Ok(Json(neighbors))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
