//! Archive data structures
//!
//! This module defines the in-memory archive built per export request:
//! - `ArchiveEntry`: one (final name, content) pair
//! - `PackagedArchive`: the ordered container with unique names

use std::sync::Arc;

/// One entry of a packed archive
///
/// `name` is the final, collision-resolved filename. Content is the
/// caller's original bytes, shared, never copied or altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub content: Arc<[u8]>,
}

impl ArchiveEntry {
    /// Create a new archive entry
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// An ordered, in-memory archive with unique entry names
///
/// Built once per export by [`resolve`](super::resolve), handed to an
/// [`ArchiveSink`](super::ArchiveSink), then discarded. Entry order is
/// the order the files were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagedArchive {
    entries: Vec<ArchiveEntry>,
}

impl PackagedArchive {
    /// Create an empty archive
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    ///
    /// The resolver guarantees name uniqueness; pushing directly is for
    /// sinks and tests that build archives by hand.
    pub fn push(&mut self, entry: ArchiveEntry) {
        self.entries.push(entry);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in packing order
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Iterate entries in packing order
    pub fn iter(&self) -> std::slice::Iter<'_, ArchiveEntry> {
        self.entries.iter()
    }

    /// Look up an entry by its final name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArchiveEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Total content size in bytes
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.content.len() as u64).sum()
    }
}

impl<'a> IntoIterator for &'a PackagedArchive {
    type Item = &'a ArchiveEntry;
    type IntoIter = std::slice::Iter<'a, ArchiveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PackagedArchive {
    type Item = ArchiveEntry;
    type IntoIter = std::vec::IntoIter<ArchiveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_accessors() {
        let mut archive = PackagedArchive::new();
        assert!(archive.is_empty());
        assert_eq!(archive.total_size(), 0);

        archive.push(ArchiveEntry::new("a.txt", b"abc".to_vec()));
        archive.push(ArchiveEntry::new("b.txt", b"defgh".to_vec()));

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.total_size(), 8);
        assert_eq!(archive.get("b.txt").unwrap().content.as_ref(), b"defgh");
        assert!(archive.get("missing.txt").is_none());

        let names: Vec<&str> = archive.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }
}
