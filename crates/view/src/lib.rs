//! `peptides-view`
//!
//! **Responsibility:** the catalog page.
//!
//! This crate provides:
//! - Page content (header/footer copy) and HTML rendering
//! - The catalog view lifecycle: load once on mount, explicit reload
//! - Catalog sources (file, HTTP, in-memory)
//! - A Leptos client-side component for WASM builds

pub mod content;
pub mod render;

#[cfg(not(target_arch = "wasm32"))]
pub mod source;
#[cfg(not(target_arch = "wasm32"))]
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use content::PageContent;
pub use render::render_page;

#[cfg(not(target_arch = "wasm32"))]
pub use source::{CatalogSource, FileSource, HttpSource, LoadError, StaticSource};
#[cfg(not(target_arch = "wasm32"))]
pub use view::{CatalogView, LoadState};
