use std::sync::Arc;

use axum::{
    extract::Extension,
    http::header,
    response::{Html, IntoResponse, Response},
};

use peptides_view::{CatalogView, FileSource};

use crate::app::{AppState, errors::ApiError};

/// Render the catalog page.
///
/// Each request is one view lifetime: the catalog is read once, and a failed
/// read still yields the page with an empty product section.
pub async fn index(Extension(state): Extension<Arc<AppState>>) -> Html<String> {
    let source = FileSource::new(&state.catalog_path);
    let mut view = CatalogView::with_content(source, state.content.clone());
    view.mount().await;
    Html(view.render_now())
}

/// Serve the raw catalog document, as the static resource the page reads.
pub async fn catalog_document(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let bytes = tokio::fs::read(&state.catalog_path).await.map_err(|e| {
        tracing::warn!(
            path = %state.catalog_path.display(),
            error = %e,
            "catalog document unavailable"
        );
        ApiError::CatalogUnavailable
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
