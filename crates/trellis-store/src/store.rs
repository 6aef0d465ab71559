//! Filesystem note store

use std::io;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use trellis_core::{DocumentIndex, DocumentMeta, IndexError};

use crate::links::extract_wiki_links;

/// A directory of markdown notes, read through fresh on every call so
/// each request sees the store as it currently is on disk.
pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        NoteStore {
            notes_dir: notes_dir.into(),
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Absolute path of a note, or `None` when the identifier walks
    /// outside the notes directory.
    fn note_path(&self, id: &str) -> Option<PathBuf> {
        let relative = Path::new(id);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return None;
        }
        // Append rather than set_extension: ids may contain dots.
        let mut path = self.notes_dir.join(relative).into_os_string();
        path.push(".md");
        Some(PathBuf::from(path))
    }
}

/// Relative-path identifier with forward slashes and no extension.
fn document_id(notes_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(notes_dir).ok()?;
    let parts: Vec<String> = relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

impl DocumentIndex for NoteStore {
    fn documents(&self) -> Result<Vec<DocumentMeta>, IndexError> {
        if !self.notes_dir.is_dir() {
            return Err(IndexError::Enumerate(format!(
                "notes directory not found: {}",
                self.notes_dir.display()
            )));
        }

        let mut documents = Vec::new();
        for entry in WalkBuilder::new(&self.notes_dir).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file())
                || path.extension().is_none_or(|ext| ext != "md")
            {
                continue;
            }
            let Some(id) = document_id(&self.notes_dir, path) else {
                continue;
            };

            let label = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| id.clone());
            let group = match id.rsplit_once('/') {
                Some((folder, _)) => folder.to_string(),
                None => String::new(),
            };
            documents.push(DocumentMeta { id, label, group });
        }

        // Walk order is filesystem-dependent; sort so the index
        // presents a stable document order.
        documents.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::debug!(count = documents.len(), "enumerated notes");
        Ok(documents)
    }

    fn outbound_links(&self, id: &str) -> Result<Option<Vec<String>>, IndexError> {
        let Some(path) = self.note_path(id) else {
            tracing::warn!(id, "rejected note identifier escaping the notes directory");
            return Ok(None);
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(IndexError::Read {
                    id: id.to_string(),
                    reason: e.to_string(),
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(extract_wiki_links(&content)))
    }
}
