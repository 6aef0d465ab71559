//! Rendering surface seam
//!
//! The surface is whatever actually draws the graph. It must be
//! idempotent by identifier: upserting an element that already exists
//! is a no-op, and removal of an absent element is harmless. Layout,
//! physics, and styling stay on the other side of this trait.

/// A node as handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceNode {
    pub id: String,
    pub label: String,
    /// Preview-only elements render differently and are torn down when
    /// the preview ends.
    pub temporary: bool,
    /// Drives the disclosure affordance (e.g. a "+" badge).
    pub has_children: bool,
    pub link_count: usize,
}

/// An edge as handed to the rendering surface, keyed by its endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceEdge {
    pub from: String,
    pub to: String,
    pub temporary: bool,
}

/// Idempotent upsert/remove primitives exposed by the renderer.
pub trait RenderSurface: Send {
    fn upsert_node(&mut self, node: SurfaceNode);
    fn upsert_edge(&mut self, edge: SurfaceEdge);
    fn remove_node(&mut self, id: &str);
    fn remove_edge(&mut self, from: &str, to: &str);
}
