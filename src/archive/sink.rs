//! The archive sink collaborator seam

use super::error::ArchiveError;
use super::types::PackagedArchive;

/// Trait for archive serialization backends
///
/// The library builds the in-memory archive; turning it into an actual
/// container (zip, tar, a browser download) and persisting it is the
/// embedding application's concern. Implementations may compress or
/// stream however they like, as long as entry order is preserved.
pub trait ArchiveSink {
    /// Consume a packed archive
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or writing fails.
    /// Failure is recoverable: the caller's state is untouched and the
    /// export can be retried.
    fn write(&mut self, archive: &PackagedArchive) -> Result<(), ArchiveError>;
}

/// Sink that collects archives in memory
///
/// Useful for tests and for hosts that serialize the entries themselves
/// after the export call returns.
#[derive(Debug, Default)]
pub struct BufferSink {
    archives: Vec<PackagedArchive>,
}

impl BufferSink {
    /// Create an empty buffer sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives received so far, in write order
    #[must_use]
    pub fn archives(&self) -> &[PackagedArchive] {
        &self.archives
    }

    /// The most recently written archive
    #[must_use]
    pub fn last(&self) -> Option<&PackagedArchive> {
        self.archives.last()
    }
}

impl ArchiveSink for BufferSink {
    fn write(&mut self, archive: &PackagedArchive) -> Result<(), ArchiveError> {
        self.archives.push(archive.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveEntry;

    #[test]
    fn test_buffer_sink_collects_archives() {
        let mut sink = BufferSink::new();
        assert!(sink.last().is_none());

        let mut archive = PackagedArchive::new();
        archive.push(ArchiveEntry::new("a.txt", b"a".to_vec()));

        sink.write(&archive).unwrap();
        assert_eq!(sink.archives().len(), 1);
        assert_eq!(sink.last().unwrap().len(), 1);
    }
}
