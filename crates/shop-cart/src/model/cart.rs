//! Cart value types.
//!
//! A [`Cart`] and its [`CartLine`]s are stored together in the cart table (see
//! [`crate::cart_actor`]). [`CurrentCart`] is what the read path hands back: either the open
//! cart or a placeholder for a customer who has none.

use super::product::{Category, ModelId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Surrogate key of a cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product entry in a cart.
///
/// `price` is the unit price captured when the line was inserted. It has no setter: a later
/// catalog price change never reaches an existing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    model: ModelId,
    quantity: u32,
    category: Category,
    price: Decimal,
}

impl CartLine {
    pub fn new(model: ModelId, quantity: u32, category: Category, price: Decimal) -> Self {
        Self {
            model,
            quantity,
            category,
            price,
        }
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// `quantity * price`, or `None` if it does not fit in a [`Decimal`].
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub customer: String,
    pub paid: bool,
    /// Set once, at checkout.
    pub payment_date: Option<NaiveDate>,
    /// Running total, adjusted together with every line change.
    pub total: Decimal,
    pub products: Vec<CartLine>,
}

impl Cart {
    /// An unpaid cart with no lines.
    pub fn open(customer: impl Into<String>, total: Decimal) -> Self {
        Self {
            customer: customer.into(),
            paid: false,
            payment_date: None,
            total,
            products: Vec::new(),
        }
    }

    pub fn line(&self, model: &ModelId) -> Option<&CartLine> {
        self.products.iter().find(|line| line.model() == model)
    }

    pub(crate) fn line_mut(&mut self, model: &ModelId) -> Option<&mut CartLine> {
        self.products.iter_mut().find(|line| line.model() == model)
    }

    /// Sum of `quantity * price` over the lines, computed from scratch. `None` on overflow.
    pub fn lines_total(&self) -> Option<Decimal> {
        self.products
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal()?))
    }

    /// The same cart without its lines, as a cart-table row carries it.
    pub fn header(&self) -> Self {
        Self {
            products: Vec::new(),
            ..self.clone()
        }
    }
}

/// A stored cart row together with the lines it owns.
///
/// Implements [`ActorEntity`](actor_store::ActorEntity); see [`crate::cart_actor`].
/// Deleting the record deletes its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub id: CartId,
    pub cart: Cart,
}

/// The customer's cart as the read path sees it.
///
/// `Empty` stands for "no open cart yet" and is never stored. Both variants serialize to the
/// [`Cart`] shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Cart")]
pub enum CurrentCart {
    Open(Cart),
    Empty { customer: String },
}

impl CurrentCart {
    pub fn is_empty_cart(&self) -> bool {
        matches!(self, CurrentCart::Empty { .. })
    }

    pub fn into_cart(self) -> Cart {
        self.into()
    }
}

impl From<CurrentCart> for Cart {
    fn from(current: CurrentCart) -> Self {
        match current {
            CurrentCart::Open(cart) => cart,
            CurrentCart::Empty { customer } => Cart::open(customer, Decimal::ZERO),
        }
    }
}

/// A line's demand, checked against live stock at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuantityToPay {
    pub model: ModelId,
    pub quantity: u32,
}

impl From<&CartLine> for ProductQuantityToPay {
    fn from(line: &CartLine) -> Self {
        Self {
            model: line.model().clone(),
            quantity: line.quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(model: &str, quantity: u32, cents: i64) -> CartLine {
        CartLine::new(
            model.into(),
            quantity,
            Category::Smartphone,
            Decimal::new(cents, 2),
        )
    }

    #[test]
    fn test_lines_total_sums_subtotals() {
        let mut cart = Cart::open("ana", Decimal::ZERO);
        cart.products.push(line("iPhone13", 2, 20000));
        cart.products.push(line("Pixel7", 1, 49999));

        assert_eq!(cart.lines_total(), Some(Decimal::new(89999, 2)));
        assert_eq!(cart.line(&"Pixel7".into()).map(CartLine::quantity), Some(1));
        assert!(cart.line(&"Galaxy".into()).is_none());
    }

    #[test]
    fn test_subtotal_overflow_is_none() {
        let huge = CartLine::new("Yacht".into(), 3, Category::Appliance, Decimal::MAX / Decimal::TWO);
        assert_eq!(huge.subtotal(), None);

        let mut cart = Cart::open("ana", Decimal::ZERO);
        cart.products.push(CartLine::new("Yacht".into(), 1, Category::Appliance, Decimal::MAX));
        cart.products.push(line("iPhone13", 1, 20000));
        assert_eq!(cart.lines_total(), None);
    }

    #[test]
    fn test_header_drops_lines_only() {
        let mut cart = Cart::open("ana", Decimal::new(20000, 2));
        cart.products.push(line("iPhone13", 1, 20000));

        let header = cart.header();
        assert!(header.products.is_empty());
        assert_eq!(header.total, cart.total);
        assert_eq!(header.customer, "ana");
    }

    #[test]
    fn test_empty_current_cart_serializes_as_cart() {
        let empty = CurrentCart::Empty {
            customer: "bo".to_string(),
        };
        assert!(empty.is_empty_cart());

        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["customer"], "bo");
        assert_eq!(json["paid"], false);
        assert!(json["paymentDate"].is_null());
        assert_eq!(json["products"].as_array().map(Vec::len), Some(0));
    }
}
