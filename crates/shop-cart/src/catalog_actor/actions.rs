//! Stock actions on a catalog [`Product`](crate::model::Product).

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Removes `n` units if at least `n` are available; otherwise changes nothing.
    DecrementStock(u32),
    /// Puts `n` units back, undoing an earlier decrement.
    Restock(u32),
    /// Changes the selling price. Existing cart lines keep their own price.
    Reprice(Decimal),
}

/// Results from [`ProductAction`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    CheckStock(u32),
    Decremented { remaining: u32 },
    /// The decrement was refused; stock is untouched.
    Insufficient { available: u32 },
    Restocked { stock: u32 },
    Repriced { previous: Decimal },
}
