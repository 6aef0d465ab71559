//! Trellis View — client-side incremental disclosure
//!
//! The state machine behind hover-to-preview / click-to-pin: owns the
//! live view's node and edge tags, a per-document neighbor cache, and
//! the temporary/expanded sets, and reconciles fetch results into an
//! injected rendering surface. Wiring to actual UI events is a thin
//! adapter's job; this crate never discovers anything ambiently.

pub mod client;
pub mod state;
pub mod surface;


pub use client::{CachedNeighborClient, FetchError, NeighborSource};
pub use state::{DisclosureState, GraphExplorer};
pub use surface::{RenderSurface, SurfaceEdge, SurfaceNode};
