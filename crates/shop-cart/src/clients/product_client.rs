//! # Product Client
//!
//! Typed access to the catalog table. Wraps a `ResourceClient<Product>` and implements the
//! [`Catalog`] seam the cart engine consumes.
use super::catalog::{Catalog, StockCommit};
use crate::catalog_actor::{ProductAction, ProductActionResult};
use crate::model::{ModelId, Product, ProductCreate};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = FrameworkError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e
    }
}

impl ProductClient {
    /// Registers a product. A model that is already registered yields `AlreadyExists`.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ModelId, FrameworkError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, model: &ModelId) -> Result<u32, FrameworkError> {
        match self
            .inner
            .perform_action(model.clone(), ProductAction::CheckStock)
            .await?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => unreachable!("CheckStock answered with {other:?}"),
        }
    }

    /// Sets a new selling price; returns the previous one.
    #[instrument(skip(self))]
    pub async fn reprice(&self, model: &ModelId, price: Decimal) -> Result<Decimal, FrameworkError> {
        match self
            .inner
            .perform_action(model.clone(), ProductAction::Reprice(price))
            .await?
        {
            ProductActionResult::Repriced { previous } => Ok(previous),
            other => unreachable!("Reprice answered with {other:?}"),
        }
    }
}

#[async_trait]
impl Catalog for ProductClient {
    #[instrument(skip(self))]
    async fn get_by_model(&self, model: &ModelId) -> Result<Option<Product>, FrameworkError> {
        self.get(model.clone()).await
    }

    #[instrument(skip(self))]
    async fn decrement_stock(
        &self,
        model: &ModelId,
        amount: u32,
    ) -> Result<StockCommit, FrameworkError> {
        debug!(amount, "Decrementing stock");
        match self
            .inner
            .perform_action(model.clone(), ProductAction::DecrementStock(amount))
            .await?
        {
            ProductActionResult::Decremented { remaining } => {
                Ok(StockCommit::Committed { remaining })
            }
            ProductActionResult::Insufficient { available } => {
                Ok(StockCommit::Insufficient { available })
            }
            other => unreachable!("DecrementStock answered with {other:?}"),
        }
    }

    #[instrument(skip(self))]
    async fn restock(&self, model: &ModelId, amount: u32) -> Result<u32, FrameworkError> {
        debug!(amount, "Restocking");
        match self
            .inner
            .perform_action(model.clone(), ProductAction::Restock(amount))
            .await?
        {
            ProductActionResult::Restocked { stock } => Ok(stock),
            other => unreachable!("Restock answered with {other:?}"),
        }
    }
}
