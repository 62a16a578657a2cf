//! Products domain module.
//!
//! This crate contains the catalog's business rules: what a product is, what a
//! valid catalog document looks like, and how it is parsed. Pure domain logic
//! (no IO, no HTTP, no rendering).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use product::Product;
