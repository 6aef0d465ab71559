//! Error taxonomy for graph construction
//!
//! Missing reference targets are never errors (they are filtered), and
//! a document with no content yields an empty result. Only faults from
//! the underlying index surface here, as a single error with a
//! human-readable message.

use crate::index::IndexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The document index failed while enumerating documents or
    /// reading a document's links.
    #[error("document index failure: {0}")]
    Index(#[from] IndexError),
}
