//! [`ActorEntity`] implementation for [`CartRecord`].
//!
//! Table constraints are checked here, one write at a time, on the working copy the actor
//! hands to `handle_action`. A failing write discards the whole batch.

use super::actions::{CartAction, CartActionResult, CartCreate, CartQuery, CartWrite};
use super::error::CartRecordError;
use crate::model::{Cart, CartId, CartLine, CartRecord};
use actor_store::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

impl CartRecord {
    fn insert_line(&mut self, line: CartLine) -> Result<(), CartRecordError> {
        if line.quantity() == 0 {
            return Err(CartRecordError::InvalidQuantity {
                model: line.model().clone(),
                quantity: 0,
            });
        }
        if self.cart.line(line.model()).is_some() {
            return Err(CartRecordError::DuplicateLine {
                cart: self.id,
                model: line.model().clone(),
            });
        }
        self.cart.products.push(line);
        Ok(())
    }

    fn set_total(&mut self, total: Decimal) -> Result<(), CartRecordError> {
        if total.is_sign_negative() && !total.is_zero() {
            return Err(CartRecordError::NegativeTotal(total));
        }
        self.cart.total = total.round_dp(2);
        Ok(())
    }

    fn apply(&mut self, write: CartWrite) -> Result<(), CartRecordError> {
        if self.cart.paid {
            return Err(CartRecordError::AlreadyPaid(self.id));
        }

        match write {
            CartWrite::InsertLine(line) => self.insert_line(line),
            CartWrite::AdjustLineQuantity { model, delta } => {
                let id = self.id;
                let line = self
                    .cart
                    .line_mut(&model)
                    .ok_or_else(|| CartRecordError::LineNotFound {
                        cart: id,
                        model: model.clone(),
                    })?;
                let quantity = i64::from(line.quantity()) + i64::from(delta);
                let quantity = u32::try_from(quantity)
                    .ok()
                    .filter(|q| *q >= 1)
                    .ok_or(CartRecordError::InvalidQuantity { model, quantity })?;
                line.set_quantity(quantity);
                Ok(())
            }
            CartWrite::DeleteLine(model) => {
                let before = self.cart.products.len();
                self.cart.products.retain(|line| line.model() != &model);
                if self.cart.products.len() == before {
                    return Err(CartRecordError::LineNotFound {
                        cart: self.id,
                        model,
                    });
                }
                Ok(())
            }
            CartWrite::DeleteAllLines => {
                self.cart.products.clear();
                Ok(())
            }
            CartWrite::AdjustTotal(delta) => {
                let total = self
                    .cart
                    .total
                    .checked_add(delta)
                    .ok_or(CartRecordError::TotalOverflow(self.id))?;
                self.set_total(total)
            }
            CartWrite::MarkPaid(date) => {
                self.cart.paid = true;
                self.cart.payment_date = Some(date);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl ActorEntity for CartRecord {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Query = CartQuery;
    type Context = ();
    type Error = CartRecordError;

    fn assign_id(seq: u32, _params: &CartCreate) -> CartId {
        CartId(seq)
    }

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        let mut record = Self {
            id,
            cart: Cart::open(params.customer, Decimal::ZERO),
        };
        for line in params.lines {
            record.insert_line(line)?;
        }
        let total = match params.initial_total {
            Some(total) => total,
            None => record
                .cart
                .lines_total()
                .ok_or(CartRecordError::TotalOverflow(id))?,
        };
        record.set_total(total)?;
        Ok(record)
    }

    fn matches(&self, query: &CartQuery) -> bool {
        let cart = &self.cart;
        match query {
            CartQuery::Open { customer } => !cart.paid && &cart.customer == customer,
            CartQuery::Paid { customer } => cart.paid && &cart.customer == customer,
            CartQuery::Customer { customer } => &cart.customer == customer,
            CartQuery::All => true,
        }
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::Apply(writes) => {
                for write in writes {
                    self.apply(write)?;
                }
                Ok(CartActionResult::Applied(self.cart.clone()))
            }
            CartAction::Wipe => {
                let lines = self.cart.products.len();
                self.cart.products.clear();
                self.cart.total = Decimal::ZERO;
                Ok(CartActionResult::Wiped { lines })
            }
        }
    }
}
