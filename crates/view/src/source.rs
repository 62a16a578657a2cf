//! Where a view reads its catalog from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use peptides_products::{Catalog, CatalogError};

/// Reasons a catalog read can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The resource answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A single-read provider of the catalog document.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read and parse the whole catalog.
    async fn fetch(&self) -> Result<Catalog, LoadError>;

    /// Short human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Catalog document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Catalog, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(Catalog::from_json_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog document served over HTTP (`GET`).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Catalog, LoadError> {
        let res = self.client.get(&self.url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let bytes = res.bytes().await?;
        Ok(Catalog::from_json_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Already-parsed catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    catalog: Catalog,
}

impl StaticSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Catalog, LoadError> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
