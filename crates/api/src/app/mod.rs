//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use peptides_view::PageContent;

use crate::config::ServerConfig;
use crate::middleware;

pub mod errors;
pub mod routes;

/// Read-only state shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub catalog_path: PathBuf,
    pub content: PageContent,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        catalog_path: config.catalog_path,
        content: config.content,
    });

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(state)),
        )
}
