use serde::{Deserialize, Serialize};

use peptides_core::{Price, ProductId};

/// One sellable item: identifier, display name, and price.
///
/// Only `id`, `name` and `price` are read from the catalog document; any other
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Price as shown on a card, e.g. `$9.50`.
    pub fn display_price(&self) -> String {
        self.price.to_string()
    }
}
