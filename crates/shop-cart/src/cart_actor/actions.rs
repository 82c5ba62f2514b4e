//! Writes, queries and creation payload for the cart table.

use crate::model::{Cart, CartLine, ModelId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Payload for inserting a cart row (optionally with its first lines).
///
/// With `initial_total` unset, the table sets the total to the sum of `lines`.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer: String,
    pub initial_total: Option<Decimal>,
    pub lines: Vec<CartLine>,
}

/// Row selection for `find`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartQuery {
    /// The unpaid cart(s) of a customer. At most one exists when carts are only opened
    /// through the engine.
    Open { customer: String },
    Paid { customer: String },
    /// Every cart of a customer, paid or not.
    Customer { customer: String },
    All,
}

/// A single write against one cart row or its lines.
#[derive(Debug, Clone, PartialEq)]
pub enum CartWrite {
    /// Caller guarantees no line for the model exists yet; a duplicate is rejected.
    InsertLine(CartLine),
    /// Adds `delta` to an existing line's quantity. The result must stay >= 1.
    AdjustLineQuantity { model: ModelId, delta: i32 },
    DeleteLine(ModelId),
    DeleteAllLines,
    /// Adds `delta` (possibly negative) to the running total.
    AdjustTotal(Decimal),
    MarkPaid(NaiveDate),
}

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Applies every write in order, all or nothing.
    Apply(Vec<CartWrite>),
    /// Drops every line and zeroes the total, paid or not. Administrative reset only.
    Wipe,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The cart as stored after the batch.
    Applied(Cart),
    Wiped { lines: usize },
}
