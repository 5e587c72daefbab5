// src/server/mod.rs
pub mod request;

use self::request::resolve;
use crate::config::Config;
use crate::error::ListingError;
use crate::listing::{Indexer, SortState};
use axum::extract::{Query, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    pub sortby: Option<String>,
    pub sortdir: Option<String>,
}

pub fn router(indexer: Arc<Indexer>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/*path", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(indexer)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let indexer = Arc::new(config.build_indexer()?);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(indexer)).await?;
    Ok(())
}

/// Lists directories, serves regular files, 404s everything else.
async fn index(
    State(indexer): State<Arc<Indexer>>,
    query: Option<Query<SortQuery>>,
    request: Request,
) -> Result<Response, ListingError> {
    let uri = request.uri().clone();
    let target = resolve(indexer.document_root(), uri.path(), indexer.rules())?;

    let metadata = tokio::fs::metadata(&target.fs_path)
        .await
        .map_err(|err| ListingError::from_io(&target.fs_path, err))?;

    if metadata.is_file() {
        debug!(path = %target.fs_path.display(), "serving file");
        return match ServeFile::new(&target.fs_path).oneshot(request).await {
            Ok(response) => Ok(response.into_response()),
            Err(never) => match never {},
        };
    }
    if !metadata.is_dir() {
        return Err(ListingError::NotFound(target.fs_path));
    }

    let link_base = target.dir_href();
    if !uri.path().ends_with('/') {
        let location = match uri.query() {
            Some(query) => format!("{link_base}?{query}"),
            None => link_base,
        };
        return Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response());
    }

    let query = query.map(|Query(query)| query).unwrap_or_default();
    let sort = SortState::from_query(query.sortby.as_deref(), query.sortdir.as_deref());
    let url_path = target.dir_url();

    let page = tokio::task::spawn_blocking(move || {
        indexer.render(&target.fs_path, &url_path, &link_base, sort)
    })
    .await??;

    Ok(Html(page).into_response())
}
