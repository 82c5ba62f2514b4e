//! Constraint violations raised by the cart table.

use crate::model::{CartId, ModelId};
use rust_decimal::Decimal;
use thiserror::Error;

/// A write the cart table refused. The whole batch it belonged to is discarded.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartRecordError {
    #[error("Cart {0} is paid and can no longer change")]
    AlreadyPaid(CartId),

    #[error("Cart {cart} already has a line for {model}")]
    DuplicateLine { cart: CartId, model: ModelId },

    #[error("Cart {cart} has no line for {model}")]
    LineNotFound { cart: CartId, model: ModelId },

    #[error("Line {model} cannot have quantity {quantity}")]
    InvalidQuantity { model: ModelId, quantity: i64 },

    #[error("Cart total cannot become negative ({0})")]
    NegativeTotal(Decimal),

    #[error("Cart {0} total does not fit in a decimal")]
    TotalOverflow(CartId),
}
