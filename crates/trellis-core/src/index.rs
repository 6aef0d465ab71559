//! Document index abstraction
//!
//! The store behind this trait owns enumeration and link extraction;
//! graph construction only ever reads through it. Implementations must
//! present a stable document order for a given snapshot — builder
//! output is deterministic exactly to the extent the order is.

use thiserror::Error;

use crate::model::DocumentMeta;

/// Faults from the backing store. Reference targets that simply don't
/// exist are not faults and never pass through here.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to enumerate documents: {0}")]
    Enumerate(String),
    #[error("failed to read document {id}: {reason}")]
    Read { id: String, reason: String },
}

/// Read-only view of a document collection and its link structure.
pub trait DocumentIndex: Send + Sync {
    /// Enumerate every document with identifier, display label, and
    /// containment group, in stable order.
    fn documents(&self) -> Result<Vec<DocumentMeta>, IndexError>;

    /// The raw outbound reference list of one document, in document
    /// order. `None` when the document does not exist or has no
    /// content. Targets are unfiltered and may reference unknown
    /// identifiers.
    fn outbound_links(&self, id: &str) -> Result<Option<Vec<String>>, IndexError>;
}

impl<T: DocumentIndex + ?Sized> DocumentIndex for &T {
    fn documents(&self) -> Result<Vec<DocumentMeta>, IndexError> {
        (**self).documents()
    }

    fn outbound_links(&self, id: &str) -> Result<Option<Vec<String>>, IndexError> {
        (**self).outbound_links(id)
    }
}

impl<T: DocumentIndex + ?Sized> DocumentIndex for std::sync::Arc<T> {
    fn documents(&self) -> Result<Vec<DocumentMeta>, IndexError> {
        (**self).documents()
    }

    fn outbound_links(&self, id: &str) -> Result<Option<Vec<String>>, IndexError> {
        (**self).outbound_links(id)
    }
}
