//! Errors returned by cart workflows.

use crate::model::ModelId;
use actor_store::FrameworkError;
use thiserror::Error;

/// Why a cart workflow stopped.
///
/// Every workflow aborts on the first error. Domain variants carry enough to tell the caller
/// which product or customer was involved; [`code`](CartError::code) gives a stable identity
/// to branch on.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Product {0} not found")]
    ProductNotFound(ModelId),

    /// Catalog stock is exactly zero.
    #[error("Product {0} is out of stock")]
    EmptyProductStock(ModelId),

    /// Catalog stock is positive but below the quantity in the cart.
    #[error("Product {model} has {available} units in stock, {requested} requested")]
    LowProductStock {
        model: ModelId,
        requested: u32,
        available: u32,
    },

    #[error("Customer {0} has no open cart")]
    CartNotFound(String),

    #[error("Cart of customer {0} is empty")]
    EmptyCart(String),

    #[error("Product {0} is not in the cart")]
    ProductNotInCart(ModelId),

    /// The cart or catalog table failed; passed through as-is.
    #[error(transparent)]
    Storage(#[from] FrameworkError),
}

impl CartError {
    pub fn code(&self) -> &'static str {
        match self {
            CartError::ProductNotFound(_) => "ProductNotFound",
            CartError::EmptyProductStock(_) => "EmptyProductStock",
            CartError::LowProductStock { .. } => "LowProductStock",
            CartError::CartNotFound(_) => "CartNotFound",
            CartError::EmptyCart(_) => "EmptyCartError",
            CartError::ProductNotInCart(_) => "ProductNotInCart",
            CartError::Storage(_) => "StorageError",
        }
    }

    /// HTTP status a transport layer should answer with.
    pub fn status(&self) -> u16 {
        match self {
            CartError::ProductNotFound(_)
            | CartError::CartNotFound(_)
            | CartError::ProductNotInCart(_) => 404,
            CartError::EmptyProductStock(_) | CartError::LowProductStock { .. } => 409,
            CartError::EmptyCart(_) => 400,
            CartError::Storage(_) => 503,
        }
    }

    /// Stock error for a line that wants `requested` units when `available` remain.
    pub(crate) fn stock(model: &ModelId, requested: u32, available: u32) -> Self {
        if available == 0 {
            CartError::EmptyProductStock(model.clone())
        } else {
            CartError::LowProductStock {
                model: model.clone(),
                requested,
                available,
            }
        }
    }
}
