// src/icons/embed.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads an icon file into a `data:` URI.
pub fn data_uri(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let media_type = mime_guess::from_path(path).first_or_octet_stream();
    Ok(format!(
        "data:{};base64,{}",
        media_type.essence_str(),
        STANDARD.encode(bytes)
    ))
}

/// Turns icon paths into inline URIs for a single render, reading each
/// distinct file once. Dropped with the response.
#[derive(Debug, Default)]
pub struct IconEmbedder {
    loaded: HashMap<PathBuf, Option<String>>,
}

impl IconEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the icon cannot be read; the page renders without it.
    pub fn embed(&mut self, path: &Path) -> Option<String> {
        if let Some(uri) = self.loaded.get(path) {
            return uri.clone();
        }

        let uri = match data_uri(path) {
            Ok(uri) => Some(uri),
            Err(err) => {
                warn!(icon = %path.display(), error = %err, "icon unavailable");
                None
            }
        };
        self.loaded.insert(path.to_path_buf(), uri.clone());
        uri
    }
}
