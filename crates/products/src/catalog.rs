//! The catalog: an ordered, immutable sequence of products.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use peptides_core::ProductId;

use crate::product::Product;

/// Why a catalog document could not be accepted.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not a JSON array of `{id, name, price}` objects, or a
    /// value inside it failed validation.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two products in one document share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Ordered product list, loaded wholesale and never mutated in place.
///
/// Ids are unique within a catalog. Order is the document's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(CatalogError::DuplicateId(product.id().clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog document (a JSON array).
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        Self::new(products)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Self::from_json_slice(s.as_bytes())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CatalogError;

    fn try_from(value: Vec<Product>) -> Result<Self, Self::Error> {
        Catalog::new(value)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(value: Catalog) -> Self {
        value.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
