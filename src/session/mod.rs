//! Stateful embedding surface
//!
//! A `RenameSession` holds what the host UI sees: the current file
//! collection (de-duplicated by original name) and the active `RuleSet`.
//! Preview rows are memoized per filename and recomputed from scratch
//! whenever the rules change, so the host can re-query on every
//! keystroke without redoing work for unchanged inputs.

use std::sync::Arc;

use moka::sync::Cache;
use rayon::prelude::*;

use crate::SourceFile;
use crate::archive::{ArchiveError, ArchiveSink, resolve};
use crate::output::{RenamePreview, format_size};
use crate::rules::RuleSet;
use crate::transform::{Pipeline, RenameOutcome};

/// Default cap on memoized preview entries
const PREVIEW_CACHE_CAPACITY: u64 = 10_000;

/// Summary of one export, for the host's notification UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Entries written to the archive
    pub entries: usize,
    /// Files whose derived name differs from the original
    pub renamed: usize,
    /// Entries that needed a collision counter
    pub collisions: usize,
}

impl std::fmt::Display for ExportReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Packed {} files ({} renamed, {} collisions resolved)",
            self.entries, self.renamed, self.collisions
        )
    }
}

/// The file collection and active rules of one renaming session
pub struct RenameSession {
    files: Vec<SourceFile>,
    rules: RuleSet,
    cache: Cache<String, RenameOutcome>,
}

impl RenameSession {
    /// Create an empty session with no-op rules
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            rules: RuleSet::default(),
            cache: Cache::new(PREVIEW_CACHE_CAPACITY),
        }
    }

    /// Add one file, ignoring it if the name is already present
    ///
    /// Returns whether the file was added.
    pub fn add_file(&mut self, file: SourceFile) -> bool {
        if self.files.iter().any(|f| f.name == file.name) {
            return false;
        }
        self.files.push(file);
        true
    }

    /// Add many files, ignoring any whose name is already present
    ///
    /// Returns how many were added.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = SourceFile>) -> usize {
        let mut added = 0;
        for file in files {
            if self.add_file(file) {
                added += 1;
            }
        }
        added
    }

    /// Remove a file by its original name
    pub fn remove_file(&mut self, name: &str) -> Option<SourceFile> {
        let pos = self.files.iter().position(|f| f.name == name)?;
        self.cache.invalidate(name);
        Some(self.files.remove(pos))
    }

    /// The files currently in the session, in insertion order
    #[must_use]
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Number of files in the session
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Whether the session holds no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The active rules
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Replace the active rules, invalidating memoized previews
    pub fn set_rules(&mut self, rules: RuleSet) {
        if self.rules != rules {
            self.rules = rules;
            self.cache.invalidate_all();
        }
    }

    /// Restore the no-op rules
    pub fn reset_rules(&mut self) {
        self.set_rules(RuleSet::default());
    }

    /// Preview rows for every file under the active rules
    ///
    /// Rows come back in insertion order. Each name's outcome is memoized
    /// until the rules change; uncached names are transformed in parallel
    /// since each transform is independent and side-effect-free.
    #[must_use]
    pub fn previews(&self) -> Vec<RenamePreview> {
        let pipeline = Pipeline::new(&self.rules);
        self.files
            .par_iter()
            .map(|file| {
                let outcome = self.outcome_for(&pipeline, file);
                RenamePreview {
                    original_name: outcome.original_name,
                    new_name: outcome.new_name,
                    size: format_size(file.size()),
                    extension: outcome.extension,
                }
            })
            .collect()
    }

    /// Pack the session's files under their final names and hand the
    /// archive to `sink`
    ///
    /// With no files present this is a no-op: the sink is not called and
    /// the report is all zeros. Collision resolution is sequential over
    /// insertion order, so repeated exports of an unchanged session
    /// produce identical archives.
    ///
    /// # Errors
    ///
    /// Propagates the sink's `ArchiveError`. The session itself is never
    /// mutated by an export, so a failed attempt can simply be retried.
    pub fn export(&self, sink: &mut dyn ArchiveSink) -> Result<ExportReport, ArchiveError> {
        if self.files.is_empty() {
            return Ok(ExportReport::default());
        }

        let pipeline = Pipeline::new(&self.rules);
        let outcomes: Vec<RenameOutcome> = self
            .files
            .iter()
            .map(|file| self.outcome_for(&pipeline, file))
            .collect();

        let renamed = outcomes
            .iter()
            .filter(|o| o.new_name != o.original_name)
            .count();

        let archive = resolve(
            outcomes
                .iter()
                .zip(&self.files)
                .map(|(o, f)| (o.new_name.as_str(), Arc::clone(&f.content))),
        );

        let collisions = archive
            .iter()
            .zip(&outcomes)
            .filter(|(entry, outcome)| entry.name != outcome.new_name)
            .count();

        sink.write(&archive)?;

        Ok(ExportReport {
            entries: archive.len(),
            renamed,
            collisions,
        })
    }

    fn outcome_for(&self, pipeline: &Pipeline, file: &SourceFile) -> RenameOutcome {
        self.cache
            .get_with(file.name.clone(), || pipeline.outcome(&file.name))
    }
}

impl Default for RenameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{BufferSink, PackagedArchive};
    use crate::rules::CaseStyle;

    fn file(name: &str, content: &[u8]) -> SourceFile {
        SourceFile::new(name, content.to_vec())
    }

    /// Sink that always fails, for the recoverability contract
    struct BrokenSink;

    impl ArchiveSink for BrokenSink {
        fn write(&mut self, _archive: &PackagedArchive) -> Result<(), ArchiveError> {
            Err(ArchiveError::sink_unavailable("no packaging backend"))
        }
    }

    #[test]
    fn test_add_files_dedupes_by_name() {
        let mut session = RenameSession::new();
        let added = session.add_files([
            file("a.txt", b"one"),
            file("b.txt", b"two"),
            file("a.txt", b"different content, same name"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(session.file_count(), 2);
        // The first occurrence wins
        assert_eq!(session.files()[0].content.as_ref(), b"one");
    }

    #[test]
    fn test_remove_file() {
        let mut session = RenameSession::new();
        session.add_file(file("a.txt", b"one"));

        assert!(session.remove_file("missing.txt").is_none());
        let removed = session.remove_file("a.txt").unwrap();
        assert_eq!(removed.name, "a.txt");
        assert!(session.is_empty());
    }

    #[test]
    fn test_previews_follow_rule_changes() {
        let mut session = RenameSession::new();
        session.add_file(file("IMG_001.png", b"x"));

        let rows = session.previews();
        assert_eq!(rows[0].new_name, "IMG_001.png");

        session.set_rules(RuleSet::builder().case(CaseStyle::Lower).build());
        let rows = session.previews();
        assert_eq!(rows[0].new_name, "img_001.png");
        assert_eq!(rows[0].extension, "png");
        assert_eq!(rows[0].size, "1 Bytes");

        session.reset_rules();
        assert_eq!(session.previews()[0].new_name, "IMG_001.png");
    }

    #[test]
    fn test_previews_keep_insertion_order() {
        let mut session = RenameSession::new();
        for name in ["c.txt", "a.txt", "b.txt"] {
            session.add_file(file(name, b""));
        }

        let names: Vec<String> = session
            .previews()
            .into_iter()
            .map(|p| p.original_name)
            .collect();
        assert_eq!(names, ["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_export_empty_session_is_noop() {
        let session = RenameSession::new();
        let mut sink = BufferSink::new();

        let report = session.export(&mut sink).unwrap();
        assert_eq!(report, ExportReport::default());
        assert!(sink.archives().is_empty());
    }

    #[test]
    fn test_export_resolves_collisions() {
        let mut session = RenameSession::new();
        session.add_files([
            file("photo-1.jpg", b"first"),
            file("photo-2.jpg", b"second"),
            file("photo-3.jpg", b"third"),
        ]);
        session.set_rules(RuleSet::builder().remove_numbers(true).remove_dashes(true).build());

        let mut sink = BufferSink::new();
        let report = session.export(&mut sink).unwrap();

        assert_eq!(report.entries, 3);
        assert_eq!(report.renamed, 3);
        assert_eq!(report.collisions, 2);

        let archive = sink.last().unwrap();
        let names: Vec<&str> = archive.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["photo.jpg", "photo (1).jpg", "photo (2).jpg"]);
        assert_eq!(archive.get("photo (2).jpg").unwrap().content.as_ref(), b"third");
    }

    #[test]
    fn test_export_failure_leaves_session_intact() {
        let mut session = RenameSession::new();
        session.add_file(file("a.txt", b"data"));
        session.set_rules(RuleSet::builder().suffix("_v2").build());

        let err = session.export(&mut BrokenSink).unwrap_err();
        assert!(matches!(err, ArchiveError::SinkUnavailable { .. }));

        // State untouched: a retry against a working sink succeeds.
        assert_eq!(session.file_count(), 1);
        assert_eq!(session.rules().suffix, "_v2");
        let mut sink = BufferSink::new();
        let report = session.export(&mut sink).unwrap();
        assert_eq!(report.entries, 1);
        assert_eq!(sink.last().unwrap().entries()[0].name, "a_v2.txt");
    }

    #[test]
    fn test_export_is_deterministic_across_retries() {
        let mut session = RenameSession::new();
        session.add_files([file("dup.txt", b"a"), file("dup2.txt", b"b")]);
        session.set_rules(RuleSet::builder().remove_numbers(true).build());

        let mut sink = BufferSink::new();
        session.export(&mut sink).unwrap();
        session.export(&mut sink).unwrap();

        assert_eq!(sink.archives()[0], sink.archives()[1]);
    }
}
