// src/filesystem/dir.rs
use super::filter::{is_interesting, ExclusionRules};
use super::Entry;
use crate::error::ListingError;
use crate::mime::MimeClassifier;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Result of reading one directory.
#[derive(Debug, Clone)]
pub struct DirectoryScan {
    /// Every name except `.` and `..`, in filesystem order.
    pub all_names: Vec<String>,
    /// Records for the names the exclusion rules let through.
    pub entries: Vec<Entry>,
}

impl DirectoryScan {
    pub fn hidden_count(&self) -> usize {
        self.all_names.len().saturating_sub(self.entries.len())
    }
}

/// Lists `dir` one level deep. Names come back sorted by file name so two
/// scans of an unchanged directory are identical.
pub fn scan_directory(
    dir: &Path,
    parent_path: &str,
    rules: &ExclusionRules,
    classifier: &MimeClassifier,
) -> Result<DirectoryScan, ListingError> {
    let metadata = std::fs::metadata(dir).map_err(|err| ListingError::from_io(dir, err))?;
    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory(dir.to_path_buf()));
    }

    let mut all_names = Vec::new();
    let mut entries = Vec::new();

    for item in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let dir_entry = match item {
            Ok(dir_entry) => dir_entry,
            Err(err) if err.depth() == 0 || err.path() == Some(dir) => {
                return Err(ListingError::from_io(dir, std::io::Error::from(err)));
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().to_string();
        if !is_interesting(&name) {
            continue;
        }

        if rules.is_displayable(&name) {
            if let Some(entry) = Entry::from_path(dir_entry.path(), parent_path, classifier) {
                entries.push(entry);
            }
        }
        all_names.push(name);
    }

    debug!(
        dir = %dir.display(),
        total = all_names.len(),
        shown = entries.len(),
        "scanned directory"
    );

    Ok(DirectoryScan { all_names, entries })
}
