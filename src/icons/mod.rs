// src/icons/mod.rs
pub mod embed;

pub use embed::IconEmbedder;

use regex::Regex;
use std::path::{Path, PathBuf};

const FOLDER_ICON: &str = "places/folder";
const FALLBACK_ICON: &str = "mimetypes/gtk-file";

/// Mime types with a curated icon when the theme has no exact match.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("text/x-shellscript", "mimetypes/text-x-script"),
    ("image/svg+xml", "mimetypes/x-office-drawing"),
    ("application/vnd.microsoft.portable-executable", "mimetypes/application-x-executable"),
    ("application/vnd.oasis.opendocument.text", "mimetypes/x-office-document"),
    ("text/rtf", "mimetypes/x-office-document"),
    ("application/pdf", "mimetypes/x-office-document"),
    ("application/vnd.oasis.opendocument.presentation", "mimetypes/x-office-presentation"),
    ("application/vnd.oasis.opendocument.spreadsheet", "mimetypes/x-office-spreadsheet"),
    ("text/csv", "mimetypes/x-office-spreadsheet"),
];

/// Generic icons by mime family, tried in order.
const CATEGORY_RULES: &[(&str, &str)] = &[
    (r"^text/", "mimetypes/text-x-generic"),
    (r"^image/", "mimetypes/image-x-generic"),
    (r"^audio/", "mimetypes/audio-x-generic"),
    (r"^video/", "mimetypes/video-x-generic"),
    (r"^(application/x-font-|font/)", "mimetypes/font-x-generic"),
    (r"^application/(x-tar|[bg]?zip2?)$", "mimetypes/package-x-generic"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTarget<'a> {
    Directory,
    Mime(Option<&'a str>),
}

/// An icon theme laid out as `<root>/<category>/<name>.<extension>`.
#[derive(Debug, Clone)]
pub struct IconTheme {
    root: PathBuf,
    extension: String,
    categories: Vec<(Regex, &'static str)>,
}

impl IconTheme {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let categories = CATEGORY_RULES
            .iter()
            .map(|(pattern, icon)| {
                (Regex::new(pattern).expect("built-in icon patterns are valid"), *icon)
            })
            .collect();
        IconTheme {
            root: root.into(),
            extension: extension.into(),
            categories,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Picks the icon file for a target. Always returns a path, falling back
    /// to the generic file icon; the returned file is not guaranteed to exist.
    pub fn resolve(&self, target: IconTarget<'_>) -> PathBuf {
        let mime = match target {
            IconTarget::Directory => return self.icon_path(FOLDER_ICON),
            IconTarget::Mime(None) => return self.icon_path(FALLBACK_ICON),
            IconTarget::Mime(Some(mime)) => mime,
        };

        if !mime.is_empty() {
            let exact = self.icon_path(&format!("mimetypes/{}", mime.replace('/', "-")));
            if exact.is_file() {
                return exact;
            }
        }

        if let Some((_, icon)) = SPECIAL_CASES.iter().find(|(special, _)| *special == mime) {
            return self.icon_path(icon);
        }

        if let Some((_, icon)) = self.categories.iter().find(|(regex, _)| regex.is_match(mime)) {
            return self.icon_path(icon);
        }

        self.icon_path(FALLBACK_ICON)
    }

    fn icon_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, self.extension))
    }
}
