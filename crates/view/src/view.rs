//! Catalog view lifecycle.
//!
//! A view starts with an empty catalog. `mount()` is the initialization hook:
//! it reads the source once per view lifetime. `reload()` re-reads on demand
//! and replaces the catalog wholesale.

use chrono::{Datelike, Utc};

use peptides_products::Catalog;

use crate::content::PageContent;
use crate::render::render_page;
use crate::source::CatalogSource;

/// Outcome of the most recent catalog read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet; the catalog is empty.
    Pending,
    /// The catalog holds the last successfully read document.
    Loaded,
    /// The last read failed; the catalog is empty.
    Failed(String),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}

pub struct CatalogView<S> {
    source: S,
    content: PageContent,
    catalog: Catalog,
    state: LoadState,
}

impl<S: CatalogSource> CatalogView<S> {
    pub fn new(source: S) -> Self {
        Self::with_content(source, PageContent::default())
    }

    pub fn with_content(source: S, content: PageContent) -> Self {
        Self {
            source,
            content,
            catalog: Catalog::empty(),
            state: LoadState::Pending,
        }
    }

    /// Load the catalog if this view has not been mounted yet.
    ///
    /// Only the first call reads the source; later calls return the state
    /// that read produced.
    pub async fn mount(&mut self) -> &LoadState {
        if self.state == LoadState::Pending {
            self.load().await;
        }
        &self.state
    }

    /// Read the source again and replace the catalog.
    pub async fn reload(&mut self) -> &LoadState {
        self.load().await;
        &self.state
    }

    async fn load(&mut self) {
        match self.source.fetch().await {
            Ok(catalog) => {
                tracing::debug!(
                    source = %self.source.describe(),
                    products = catalog.len(),
                    "catalog loaded"
                );
                self.catalog = catalog;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "catalog load failed; rendering without products"
                );
                self.catalog = Catalog::empty();
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Render the page with `year` in the footer.
    pub fn render(&self, year: i32) -> String {
        render_page(&self.content, &self.catalog, year)
    }

    /// Render the page stamped with the current calendar year (UTC).
    pub fn render_now(&self) -> String {
        self.render(Utc::now().year())
    }
}
