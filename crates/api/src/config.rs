//! Server configuration, read from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use peptides_view::PageContent;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG_PATH: &str = "public/catalog.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Catalog document rendered at `/` and served at `/catalog.json`.
    pub catalog_path: PathBuf,
    pub content: PageContent,
}

impl ServerConfig {
    pub const BIND_ADDR_VAR: &'static str = "CATALOG_BIND_ADDR";
    pub const CATALOG_PATH_VAR: &'static str = "CATALOG_PATH";

    pub fn new(bind_addr: SocketAddr, catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            catalog_path: catalog_path.into(),
            content: PageContent::default(),
        }
    }

    /// Read `CATALOG_BIND_ADDR` and `CATALOG_PATH`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(Self::BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: Self::BIND_ADDR_VAR,
                    value,
                })?,
            None => default_bind_addr(),
        };

        let catalog_path = match lookup(Self::CATALOG_PATH_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: Self::CATALOG_PATH_VAR,
                });
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_CATALOG_PATH),
        };

        Ok(Self::new(bind_addr, catalog_path))
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
