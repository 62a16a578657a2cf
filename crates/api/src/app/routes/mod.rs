use axum::{Router, routing::get};

pub mod pages;
pub mod system;

/// Router for the public catalog pages.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/catalog.json", get(pages::catalog_document))
}
