// src/error.rs
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::{html, DOCTYPE};
use std::path::{Path, PathBuf};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("not found: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ListingError {
    /// Maps an I/O failure on `path` to `NotFound` or `Unreadable`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => ListingError::NotFound(path.to_path_buf()),
            _ => ListingError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ListingError::NotFound(_) | ListingError::NotADirectory(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "listing failed");
        }

        let heading = format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        );
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head { title { (heading) } }
                body { h1 { (heading) } }
            }
        };
        (status, Html(markup.into_string())).into_response()
    }
}
