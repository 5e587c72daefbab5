// src/config.rs
use crate::filesystem::ExclusionRules;
use crate::icons::IconTheme;
use crate::listing::Indexer;
use crate::mime::MimeClassifier;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve sortable HTML directory listings", long_about = None)]
pub struct Config {
    /// Directory that URL paths are resolved against.
    #[arg(long, env = "DIRINDEX_ROOT", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    #[arg(long, env = "DIRINDEX_BIND", value_name = "ADDR", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Icon theme laid out as `<category>/<name>.<extension>`.
    #[arg(
        long,
        env = "DIRINDEX_ICON_ROOT",
        value_name = "DIR",
        default_value = "/usr/share/icons/gnome/32x32"
    )]
    pub icon_root: PathBuf,

    #[arg(long, env = "DIRINDEX_ICON_EXTENSION", default_value = "png")]
    pub icon_extension: String,

    /// Name of the index itself; never listed.
    #[arg(long, env = "DIRINDEX_INDEX_NAME", default_value = "index.html")]
    pub index_name: String,

    /// Extra exclusion regex, checked after the built-in ones. Repeatable.
    #[arg(long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Look names up in the mime_guess database before the built-in table.
    #[arg(long, env = "DIRINDEX_GUESS_MIME")]
    pub guess_mime: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot use document root {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document root {0} is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Config {
    pub fn build_indexer(&self) -> Result<Indexer, ConfigError> {
        let root = std::fs::canonicalize(&self.root).map_err(|source| ConfigError::Root {
            path: self.root.clone(),
            source,
        })?;
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory(root));
        }

        let rules = ExclusionRules::new(&self.index_name).with_patterns(&self.exclude)?;

        let classifier = if self.guess_mime {
            MimeClassifier::with_guessing()
        } else {
            MimeClassifier::new()
        };

        if !self.icon_root.is_dir() {
            warn!(
                icon_root = %self.icon_root.display(),
                "icon theme not found, listings will render without icons"
            );
        }
        let icons = IconTheme::new(&self.icon_root, &self.icon_extension);

        info!(
            root = %root.display(),
            icon_root = %icons.root().display(),
            guess_mime = self.guess_mime,
            "indexer ready"
        );
        Ok(Indexer::new(root, rules, classifier, icons))
    }
}
