//! # Catalog Seam
//!
//! What the cart engine needs from the product catalog: a lookup by model and a stock commit
//! that can be undone. [`ProductClient`](super::ProductClient) is the production
//! implementation.

use crate::model::{ModelId, Product};
use actor_store::FrameworkError;
use async_trait::async_trait;

/// Outcome of a conditional stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCommit {
    Committed { remaining: u32 },
    /// Stock was lower than the amount asked for; nothing was taken.
    Insufficient { available: u32 },
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current price, stock and category of `model`, or `None` if it is not in the catalog.
    async fn get_by_model(&self, model: &ModelId) -> Result<Option<Product>, FrameworkError>;

    /// Takes `amount` units, or none at all if fewer are available.
    async fn decrement_stock(
        &self,
        model: &ModelId,
        amount: u32,
    ) -> Result<StockCommit, FrameworkError>;

    /// Returns `amount` units taken by an earlier decrement. Yields the new stock.
    async fn restock(&self, model: &ModelId, amount: u32) -> Result<u32, FrameworkError>;
}
