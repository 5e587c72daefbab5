// src/filesystem/mod.rs
pub mod dir;
pub mod file;
pub mod filter;

pub use dir::{scan_directory, DirectoryScan};
pub use filter::ExclusionRules;

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, devices and anything that could not be stat'ed.
    /// Holds the filesystem type name shown in the listing.
    Other(&'static str),
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Directory => "dir",
            EntryKind::File => "file",
            EntryKind::Other(name) => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One item of the listed directory, built once per request and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name; invalid UTF-8 is replaced.
    pub name: String,
    /// Name exactly as stored on disk, used for links and ordering.
    pub file_name: OsString,
    /// URL path of the containing directory, always ending in `/`.
    pub parent_path: String,
    pub full_path: PathBuf,
    pub kind: EntryKind,
    pub size: Option<u64>,
    pub modified: Option<chrono::DateTime<chrono::Utc>>,
    pub mime_type: Option<String>,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
