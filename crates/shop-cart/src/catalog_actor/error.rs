//! Error types for the catalog actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors a catalog product raises. They reach callers inside
/// [`FrameworkError::EntityError`](actor_store::FrameworkError::EntityError).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Stock movements of zero units are rejected.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    #[error("Restocking {amount} units would overflow stock {stock}")]
    StockOverflow { stock: u32, amount: u32 },
}
