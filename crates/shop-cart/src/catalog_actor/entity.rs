//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{ModelId, Product, ProductCreate};
use actor_store::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn valid_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price.is_sign_negative() {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price.round_dp(2))
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ModelId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ();
    type Context = ();
    type Error = ProductError;

    /// Products are keyed by model, so registering a model twice is rejected by the table.
    fn assign_id(_seq: u32, params: &ProductCreate) -> ModelId {
        params.model.clone()
    }

    fn from_create_params(model: ModelId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            model,
            category: params.category,
            price: valid_price(params.price)?,
            stock: params.stock,
        })
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }

    /// # Actions
    /// - `CheckStock`: current stock, no change.
    /// - `DecrementStock(n)`: conditional; answers `Insufficient` instead of going negative.
    /// - `Restock(n)`: compensation for a decrement.
    /// - `Reprice(p)`: new selling price.
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::DecrementStock(0) | ProductAction::Restock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::DecrementStock(amount) => {
                if amount > self.stock {
                    return Ok(ProductActionResult::Insufficient {
                        available: self.stock,
                    });
                }
                self.stock -= amount;
                Ok(ProductActionResult::Decremented {
                    remaining: self.stock,
                })
            }
            ProductAction::Restock(amount) => {
                self.stock =
                    self.stock
                        .checked_add(amount)
                        .ok_or(ProductError::StockOverflow {
                            stock: self.stock,
                            amount,
                        })?;
                Ok(ProductActionResult::Restocked { stock: self.stock })
            }
            ProductAction::Reprice(price) => {
                let previous = self.price;
                self.price = valid_price(price)?;
                Ok(ProductActionResult::Repriced { previous })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn phone(stock: u32) -> Product {
        Product::from_create_params(
            "iPhone13".into(),
            ProductCreate::new("iPhone13", Category::Smartphone, Decimal::new(200, 0), stock),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_decrement_never_goes_negative() {
        let mut product = phone(2);

        let refused = product
            .handle_action(ProductAction::DecrementStock(3), &())
            .await
            .unwrap();
        assert_eq!(refused, ProductActionResult::Insufficient { available: 2 });
        assert_eq!(product.stock, 2);

        let taken = product
            .handle_action(ProductAction::DecrementStock(2), &())
            .await
            .unwrap();
        assert_eq!(taken, ProductActionResult::Decremented { remaining: 0 });
    }

    #[tokio::test]
    async fn test_zero_amounts_rejected() {
        let mut product = phone(5);
        for action in [ProductAction::DecrementStock(0), ProductAction::Restock(0)] {
            let err = product.handle_action(action, &()).await.unwrap_err();
            assert_eq!(err, ProductError::InvalidQuantity(0));
        }
    }

    #[tokio::test]
    async fn test_restock_overflow_is_an_error() {
        let mut product = phone(u32::MAX);
        let err = product
            .handle_action(ProductAction::Restock(1), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::StockOverflow { .. }));
    }

    #[test]
    fn test_price_rounded_and_validated() {
        let product = Product::from_create_params(
            "Fridge".into(),
            ProductCreate::new("Fridge", Category::Appliance, Decimal::new(99999, 3), 1),
        )
        .unwrap();
        assert_eq!(product.price, Decimal::new(10000, 2));

        let negative = Product::from_create_params(
            "Fridge".into(),
            ProductCreate::new("Fridge", Category::Appliance, Decimal::new(-1, 0), 1),
        );
        assert!(matches!(negative, Err(ProductError::InvalidPrice(_))));
    }
}
