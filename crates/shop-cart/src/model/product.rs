//! Catalog products.
//!
//! [`Product`] implements [`ActorEntity`](actor_store::ActorEntity) and lives in the catalog
//! table, keyed by its [`ModelId`]. See [`crate::catalog_actor`] for its actions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Product model identifier, e.g. `"iPhone13"`. Natural key of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub String);

impl From<&str> for ModelId {
    fn from(model: &str) -> Self {
        Self(model.to_string())
    }
}

impl From<String> for ModelId {
    fn from(model: String) -> Self {
        Self(model)
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Smartphone,
    Laptop,
    Appliance,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Smartphone => "Smartphone",
            Category::Laptop => "Laptop",
            Category::Appliance => "Appliance",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub model: ModelId,
    pub category: Category,
    /// Current selling price, 2 decimal places.
    pub price: Decimal,
    /// Units available; only checkout draws it down.
    pub stock: u32,
}

/// DTO for registering a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub model: ModelId,
    pub category: Category,
    pub price: Decimal,
    pub stock: u32,
}

impl ProductCreate {
    pub fn new(
        model: impl Into<ModelId>,
        category: Category,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            model: model.into(),
            category,
            price,
            stock,
        }
    }
}
