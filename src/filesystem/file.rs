// src/filesystem/file.rs
use super::{Entry, EntryKind};
use crate::mime::MimeClassifier;
use std::fs::FileType;
use std::path::Path;
use tracing::warn;

impl Entry {
    /// Builds the record for `path`, which lives in the directory served at
    /// `parent_path`.
    ///
    /// The type comes from `lstat`, size and mtime from `stat`, so a symlink
    /// reports as `link` with its target's size. When `stat` fails (a broken
    /// link, a permission problem) the entry is still listed without size or
    /// mtime. Returns `None` only when the path has no file name.
    pub fn from_path(path: &Path, parent_path: &str, classifier: &MimeClassifier) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        let name = file_name.to_string_lossy().to_string();

        let kind = match std::fs::symlink_metadata(path) {
            Ok(metadata) => kind_of(metadata.file_type()),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "lstat failed");
                EntryKind::Other("unknown")
            }
        };

        let (size, modified) = match std::fs::metadata(path) {
            Ok(metadata) => (
                Some(metadata.len()),
                metadata.modified().ok().map(chrono::DateTime::<chrono::Utc>::from),
            ),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stat failed, listing without metadata");
                (None, None)
            }
        };

        let mime_type = match kind {
            EntryKind::File => classifier.classify(&name),
            _ => None,
        };

        Some(Entry {
            name,
            file_name,
            parent_path: parent_path.to_string(),
            full_path: path.to_path_buf(),
            kind,
            size,
            modified,
            mime_type,
        })
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        EntryKind::Other("link")
    } else {
        special_kind(file_type)
    }
}

#[cfg(unix)]
fn special_kind(file_type: FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_fifo() {
        EntryKind::Other("fifo")
    } else if file_type.is_socket() {
        EntryKind::Other("socket")
    } else if file_type.is_block_device() {
        EntryKind::Other("block")
    } else if file_type.is_char_device() {
        EntryKind::Other("char")
    } else {
        EntryKind::Other("unknown")
    }
}

#[cfg(not(unix))]
fn special_kind(_file_type: FileType) -> EntryKind {
    EntryKind::Other("unknown")
}
