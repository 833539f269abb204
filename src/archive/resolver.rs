//! First-come-first-served name collision resolution

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use super::types::{ArchiveEntry, PackagedArchive};
use crate::transform::split_extension;

/// Allocator that disambiguates repeated names with a ` (n)` counter
///
/// The first claim of a name keeps it unchanged; each later claim gets
/// the next counter, inserted before the last `.` (or appended when the
/// name has no extension). Allocation depends on claim order, so the
/// allocator must be fed sequentially.
#[derive(Debug, Default)]
pub struct NameAllocator {
    seen: HashMap<String, u32>,
}

impl NameAllocator {
    /// Create an allocator with no names claimed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a name, returning the unique final form
    pub fn allocate(&mut self, name: &str) -> String {
        match self.seen.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(0);
                name.to_string()
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += 1;
                let count = *slot.get();
                let (base, ext) = split_extension(name);
                if ext.is_empty() {
                    format!("{name} ({count})")
                } else {
                    format!("{base} ({count}).{ext}")
                }
            }
        }
    }
}

/// Pack (transformed name, content) pairs into a collision-free archive
///
/// Entries keep their input order and their content untouched; only
/// duplicate names are rewritten. Sequential by contract: the counter a
/// duplicate receives depends on how many duplicates came before it.
pub fn resolve<I, N>(pairs: I) -> PackagedArchive
where
    I: IntoIterator<Item = (N, Arc<[u8]>)>,
    N: AsRef<str>,
{
    let mut allocator = NameAllocator::new();
    let mut archive = PackagedArchive::new();

    for (name, content) in pairs {
        let final_name = allocator.allocate(name.as_ref());
        archive.push(ArchiveEntry::new(final_name, content));
    }

    archive
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(data: &[u8]) -> Arc<[u8]> {
        Arc::from(data)
    }

    fn pack(names: &[&str]) -> Vec<String> {
        let archive = resolve(names.iter().map(|n| (*n, bytes(b""))));
        archive.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_unique_names_pass_through() {
        assert_eq!(pack(&["a.txt", "b.txt"]), ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_collisions_get_counters() {
        assert_eq!(
            pack(&["a.txt", "a.txt", "a.txt"]),
            ["a.txt", "a (1).txt", "a (2).txt"]
        );
    }

    #[test]
    fn test_collision_without_extension_appends() {
        assert_eq!(pack(&["b", "b"]), ["b", "b (1)"]);
    }

    #[test]
    fn test_counter_inserts_before_last_dot_only() {
        assert_eq!(
            pack(&["data.tar.gz", "data.tar.gz"]),
            ["data.tar.gz", "data.tar (1).gz"]
        );
    }

    #[test]
    fn test_independent_counters_per_name() {
        assert_eq!(
            pack(&["a.txt", "b.txt", "a.txt", "b.txt"]),
            ["a.txt", "b.txt", "a (1).txt", "b (1).txt"]
        );
    }

    #[test]
    fn test_content_and_order_preserved() {
        let archive = resolve(vec![
            ("dup.bin", bytes(b"first")),
            ("dup.bin", bytes(b"second")),
        ]);

        let entries = archive.entries();
        assert_eq!(entries[0].name, "dup.bin");
        assert_eq!(entries[0].content.as_ref(), b"first");
        assert_eq!(entries[1].name, "dup (1).bin");
        assert_eq!(entries[1].content.as_ref(), b"second");
    }
}
