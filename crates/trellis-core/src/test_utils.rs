//! Test fixtures for trellis-core

use std::collections::HashMap;

use crate::index::{DocumentIndex, IndexError};
use crate::model::DocumentMeta;

/// In-memory document index with a fixed document order.
pub struct MemoryIndex {
    documents: Vec<DocumentMeta>,
    links: HashMap<String, Vec<String>>,
}

impl MemoryIndex {
    /// Build from `(id, group, links)` tuples; labels default to the id.
    pub fn new(docs: &[(&str, &str, &[&str])]) -> Self {
        MemoryIndex {
            documents: docs
                .iter()
                .map(|(id, group, _)| DocumentMeta {
                    id: id.to_string(),
                    label: id.to_string(),
                    group: group.to_string(),
                })
                .collect(),
            links: docs
                .iter()
                .map(|(id, _, links)| {
                    (
                        id.to_string(),
                        links.iter().map(|l| l.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl DocumentIndex for MemoryIndex {
    fn documents(&self) -> Result<Vec<DocumentMeta>, IndexError> {
        Ok(self.documents.clone())
    }

    fn outbound_links(&self, id: &str) -> Result<Option<Vec<String>>, IndexError> {
        Ok(self.links.get(id).cloned())
    }
}
