//! Collision resolution and archive packing
//!
//! This module turns a list of (transformed name, content) pairs into a
//! `PackagedArchive`: an ordered, in-memory mapping whose names are
//! guaranteed unique. Duplicate transformed names are disambiguated with
//! a ` (n)` counter inserted before the extension, first come first
//! served, so resolution is inherently sequential.
//!
//! Serializing the archive into an actual container (zip, tar, whatever
//! the host tool downloads) is the job of an [`ArchiveSink`]
//! implementation supplied by the embedding application.

mod error;
mod resolver;
mod sink;
mod types;

pub use error::ArchiveError;
pub use resolver::{NameAllocator, resolve};
pub use sink::{ArchiveSink, BufferSink};
pub use types::{ArchiveEntry, PackagedArchive};
