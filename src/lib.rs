//! Renamr - a batch filename-rewrite engine
//!
//! This library derives new filenames from an ordered pipeline of rewrite
//! rules, resolves collisions between the derived names, and packs the
//! original byte content under the final names into an in-memory archive
//! for an external serializer to consume.

use std::sync::Arc;

use thiserror::Error;

pub mod archive;
pub mod output;
pub mod rules;
pub mod session;
pub mod transform;

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum RenamrError {
    /// Archive packing or sink error
    #[error("Archive error: {0}")]
    ArchiveError(#[from] archive::ArchiveError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Data struct pairing an original filename with its byte content
///
/// Content is shared behind an `Arc` so packing an archive never copies
/// file bytes. The library only ever reads the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<[u8]>,
}

impl SourceFile {
    /// Create a new `SourceFile`
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Content size in bytes
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}
