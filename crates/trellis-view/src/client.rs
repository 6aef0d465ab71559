//! Cached neighbor fetching
//!
//! One resolver call per uncached identifier for the life of the
//! session; hits are served synchronously from the map. The cache is
//! append-only and never invalidated — staleness against a changing
//! document set is an accepted tradeoff, with `reset` as the wholesale
//! escape hatch for hosts that observe document changes.

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use trellis_core::NeighborGraph;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("neighbor fetch failed: {0}")]
    Fetch(String),
}

/// Where neighbor subgraphs come from — typically an HTTP client for
/// `/graph/node/<id>`, or the resolver itself when embedded in-process.
#[async_trait]
pub trait NeighborSource: Send + Sync {
    async fn neighbors(&self, id: &str) -> Result<NeighborGraph, FetchError>;
}

/// Session cache in front of a `NeighborSource`.
pub struct CachedNeighborClient<S> {
    source: S,
    cache: DashMap<String, NeighborGraph>,
}

impl<S: NeighborSource> CachedNeighborClient<S> {
    pub fn new(source: S) -> Self {
        CachedNeighborClient {
            source,
            cache: DashMap::new(),
        }
    }

    /// Fetch neighbors for `id`, cache-first. Source failures degrade
    /// to an empty result with a logged diagnostic — they never
    /// propagate into the event-handling path, and are not cached so a
    /// later request can retry.
    pub async fn fetch(&self, id: &str) -> NeighborGraph {
        if let Some(hit) = self.cache.get(id) {
            return hit.clone();
        }
        match self.source.neighbors(id).await {
            Ok(result) => {
                // Insert-if-absent: a concurrent fetch for the same id
                // may have landed first, and its entry wins.
                self.cache
                    .entry(id.to_string())
                    .or_insert(result)
                    .value()
                    .clone()
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "neighbor fetch failed, treating as empty");
                NeighborGraph::default()
            }
        }
    }

    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    /// Drop every cached entry.
    pub fn reset(&self) {
        self.cache.clear();
    }
}
