//! Trellis Store — filesystem-backed document index
//!
//! Walks a directory of markdown notes and exposes them through the
//! `DocumentIndex` trait: one document per `.md` file, identified by
//! its extension-less relative path, grouped by folder.

pub mod config;
pub mod links;
pub mod store;

pub use config::{Config, ConfigError};
pub use links::extract_wiki_links;
pub use store::NoteStore;
