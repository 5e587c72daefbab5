// src/listing/mod.rs
pub mod render;
pub mod sort;

pub use render::render_listing;
pub use sort::{SortBy, SortDirection, SortState};

use crate::error::ListingError;
use crate::filesystem::{scan_directory, Entry, ExclusionRules};
use crate::icons::IconTheme;
use crate::mime::MimeClassifier;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything one page needs, already sorted.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Decoded URL path of the directory, ending in `/`.
    pub url_path: String,
    /// Path part of the request URI as received, used for header links.
    pub link_base: String,
    pub sort: SortState,
    pub entries: Vec<Entry>,
    pub hidden_count: usize,
}

impl Listing {
    pub fn has_parent(&self) -> bool {
        self.url_path != "/"
    }
}

/// Long-lived, read-only settings shared by every request. Holds no
/// directory data between requests.
#[derive(Debug)]
pub struct Indexer {
    document_root: PathBuf,
    rules: ExclusionRules,
    classifier: MimeClassifier,
    icons: IconTheme,
}

impl Indexer {
    pub fn new(
        document_root: impl Into<PathBuf>,
        rules: ExclusionRules,
        classifier: MimeClassifier,
        icons: IconTheme,
    ) -> Self {
        Indexer {
            document_root: document_root.into(),
            rules,
            classifier,
            icons,
        }
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    /// Scans and sorts `dir`.
    pub fn listing(
        &self,
        dir: &Path,
        url_path: &str,
        link_base: &str,
        sort: SortState,
    ) -> Result<Listing, ListingError> {
        let scan = scan_directory(dir, url_path, &self.rules, &self.classifier)?;
        let hidden_count = scan.hidden_count();
        let mut entries = scan.entries;
        sort.sort(&mut entries);

        debug!(
            dir = %dir.display(),
            sort_by = sort.field.as_query(),
            sort_dir = sort.direction.as_query(),
            "sorted listing"
        );

        Ok(Listing {
            url_path: url_path.to_string(),
            link_base: link_base.to_string(),
            sort,
            entries,
            hidden_count,
        })
    }

    /// Runs the whole pipeline for one request and returns the HTML page.
    pub fn render(
        &self,
        dir: &Path,
        url_path: &str,
        link_base: &str,
        sort: SortState,
    ) -> Result<String, ListingError> {
        let listing = self.listing(dir, url_path, link_base, sort)?;
        Ok(render_listing(&listing, &self.icons))
    }
}
