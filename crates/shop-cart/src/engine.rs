//! # Cart Engine
//!
//! The cart workflows: view, add, remove one unit, clear, check out, history, and the
//! administrative list and reset. Each customer-scoped workflow
//!
//! 1. takes the customer's lock from [`CustomerLocks`] for its whole run,
//! 2. reads the catalog and the open cart,
//! 3. issues all of its cart writes as one [`CartClient::apply`] batch (or one create).
//!
//! The batch is atomic in the cart table, so `total` and the lines never drift apart, and the
//! lock keeps a customer at one open cart.
//!
//! ## Checkout
//!
//! Checkout validates every line against live stock before touching anything, then takes
//! stock product by product with a conditional decrement, and finally marks the cart paid.
//! If a decrement is refused or marking paid fails, every unit already taken is put back, so
//! a failed checkout leaves both the cart and the catalog as they were.
//!
//! ## Pricing
//!
//! A line keeps the price it was added at. Repeat adds and removals move the total by that
//! snapshot price, never by the current catalog price.

use crate::cart_actor::CartWrite;
use crate::clients::{CartClient, Catalog, ProductClient, StockCommit};
use crate::error::CartError;
use crate::locks::CustomerLocks;
use crate::model::{Cart, CartLine, CurrentCart, ModelId, ProductQuantityToPay};
use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info, instrument, warn};

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Cart workflows over a cart table and a catalog.
#[derive(Clone)]
pub struct CartEngine<C = ProductClient> {
    carts: CartClient,
    catalog: C,
    locks: CustomerLocks,
    today: fn() -> NaiveDate,
}

impl<C: Catalog> CartEngine<C> {
    pub fn new(carts: CartClient, catalog: C) -> Self {
        Self {
            carts,
            catalog,
            locks: CustomerLocks::new(),
            today: utc_today,
        }
    }

    /// Replaces the clock used for payment dates.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The open cart with its lines, or [`CurrentCart::Empty`] if the customer has none.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer: &str) -> Result<CurrentCart, CartError> {
        let _guard = self.locks.acquire(customer).await;
        match self.carts.find_open_cart(customer).await? {
            Some((id, header)) => Ok(CurrentCart::Open(
                self.carts.populate_lines(id, header).await?,
            )),
            None => Ok(CurrentCart::Empty {
                customer: customer.to_string(),
            }),
        }
    }

    /// Adds one unit of `model`, opening a cart if the customer has none.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, customer: &str, model: &ModelId) -> Result<(), CartError> {
        let product = self
            .catalog
            .get_by_model(model)
            .await?
            .ok_or_else(|| CartError::ProductNotFound(model.clone()))?;
        // Stock is only reserved at checkout; here it just has to be non-zero.
        if product.stock == 0 {
            return Err(CartError::EmptyProductStock(model.clone()));
        }

        let _guard = self.locks.acquire(customer).await;
        let Some((id, header)) = self.carts.find_open_cart(customer).await? else {
            let line = CartLine::new(model.clone(), 1, product.category, product.price);
            self.carts.create_cart_with_line(customer, line).await?;
            return Ok(());
        };

        let cart = self.carts.populate_lines(id, header).await?;
        let writes = match cart.line(model) {
            Some(line) => vec![
                CartWrite::AdjustTotal(line.price()),
                CartWrite::AdjustLineQuantity {
                    model: model.clone(),
                    delta: 1,
                },
            ],
            None => vec![
                CartWrite::AdjustTotal(product.price),
                CartWrite::InsertLine(CartLine::new(
                    model.clone(),
                    1,
                    product.category,
                    product.price,
                )),
            ],
        };
        let cart = self.carts.apply(id, writes).await?;
        info!(%id, total = %cart.total, "Added to cart");
        Ok(())
    }

    /// Pays the open cart: validates stock, takes it, stamps today's date.
    #[instrument(skip(self))]
    pub async fn checkout(&self, customer: &str) -> Result<(), CartError> {
        let _guard = self.locks.acquire(customer).await;
        let (id, header) = self
            .carts
            .find_open_cart(customer)
            .await?
            .ok_or_else(|| CartError::CartNotFound(customer.to_string()))?;
        let cart = self.carts.populate_lines(id, header).await?;
        if cart.products.is_empty() {
            return Err(CartError::EmptyCart(customer.to_string()));
        }

        let to_pay = self.validate_stock(&cart).await?;
        let taken = self.take_stock(&to_pay).await?;

        let date = (self.today)();
        if let Err(e) = self.carts.mark_paid(id, date).await {
            warn!(%id, error = %e, "Marking paid failed, returning stock");
            self.return_stock(&taken).await;
            return Err(e.into());
        }

        info!(%id, %date, total = %cart.total, "Checked out");
        Ok(())
    }

    /// Removes one unit of `model` from the open cart.
    #[instrument(skip(self))]
    pub async fn remove_product_from_cart(
        &self,
        customer: &str,
        model: &ModelId,
    ) -> Result<(), CartError> {
        if self.catalog.get_by_model(model).await?.is_none() {
            return Err(CartError::ProductNotFound(model.clone()));
        }

        let _guard = self.locks.acquire(customer).await;
        let (id, header) = self
            .carts
            .find_open_cart(customer)
            .await?
            .ok_or_else(|| CartError::CartNotFound(customer.to_string()))?;
        let cart = self.carts.populate_lines(id, header).await?;
        if cart.products.is_empty() {
            return Err(CartError::EmptyCart(customer.to_string()));
        }
        let line = cart
            .line(model)
            .ok_or_else(|| CartError::ProductNotInCart(model.clone()))?;

        let line_write = if line.quantity() > 1 {
            CartWrite::AdjustLineQuantity {
                model: model.clone(),
                delta: -1,
            }
        } else {
            CartWrite::DeleteLine(model.clone())
        };
        let cart = self
            .carts
            .apply(id, vec![line_write, CartWrite::AdjustTotal(-line.price())])
            .await?;
        info!(%id, total = %cart.total, "Removed from cart");
        Ok(())
    }

    /// Empties the open cart.
    ///
    /// An open cart that is already empty, or a customer whose carts are all paid, is a
    /// successful no-op. Only a customer who never had a cart gets `CartNotFound`.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self, customer: &str) -> Result<(), CartError> {
        let _guard = self.locks.acquire(customer).await;
        let Some((id, header)) = self.carts.find_open_cart(customer).await? else {
            if self.carts.find_customer_carts(customer).await?.is_empty() {
                return Err(CartError::CartNotFound(customer.to_string()));
            }
            debug!("No open cart, nothing to clear");
            return Ok(());
        };

        let cart = self.carts.populate_lines(id, header).await?;
        if cart.products.is_empty() {
            return Ok(());
        }
        self.carts
            .apply(
                id,
                vec![CartWrite::AdjustTotal(-cart.total), CartWrite::DeleteAllLines],
            )
            .await?;
        info!(%id, "Cleared cart");
        Ok(())
    }

    /// The customer's paid carts with their lines. The open cart is never included.
    #[instrument(skip(self))]
    pub async fn get_customer_carts(&self, customer: &str) -> Result<Vec<Cart>, CartError> {
        let mut history = Vec::new();
        for (id, header) in self.carts.find_paid_carts(customer).await? {
            history.push(self.carts.populate_lines(id, header).await?);
        }
        Ok(history)
    }

    /// Every cart of every customer, paid or not, with lines.
    #[instrument(skip(self))]
    pub async fn get_all_carts(&self) -> Result<Vec<Cart>, CartError> {
        let mut all = Vec::new();
        for (id, header) in self.carts.find_all_carts().await? {
            all.push(self.carts.populate_lines(id, header).await?);
        }
        Ok(all)
    }

    /// Deletes every line, then every cart.
    #[instrument(skip(self))]
    pub async fn delete_all_carts(&self) -> Result<(), CartError> {
        let lines = self.carts.delete_all_lines_globally().await?;
        let carts = self.carts.delete_all_carts().await?;
        info!(lines, carts, "Deleted all carts");
        Ok(())
    }

    /// Checks every line against current stock. Nothing is written.
    async fn validate_stock(&self, cart: &Cart) -> Result<Vec<ProductQuantityToPay>, CartError> {
        let mut to_pay = Vec::with_capacity(cart.products.len());
        for line in &cart.products {
            let item = ProductQuantityToPay::from(line);
            let product = self
                .catalog
                .get_by_model(&item.model)
                .await?
                .ok_or_else(|| CartError::ProductNotFound(item.model.clone()))?;
            if product.stock == 0 || item.quantity > product.stock {
                return Err(CartError::stock(&item.model, item.quantity, product.stock));
            }
            to_pay.push(item);
        }
        Ok(to_pay)
    }

    /// Decrements stock for each item. On the first refusal or failure, returns what was
    /// already taken and reports the error.
    async fn take_stock(
        &self,
        to_pay: &[ProductQuantityToPay],
    ) -> Result<Vec<ProductQuantityToPay>, CartError> {
        let mut taken: Vec<ProductQuantityToPay> = Vec::with_capacity(to_pay.len());
        for item in to_pay {
            let failure = match self.catalog.decrement_stock(&item.model, item.quantity).await {
                Ok(StockCommit::Committed { remaining }) => {
                    debug!(model = %item.model, quantity = item.quantity, remaining, "Stock taken");
                    taken.push(item.clone());
                    continue;
                }
                Ok(StockCommit::Insufficient { available }) => {
                    CartError::stock(&item.model, item.quantity, available)
                }
                Err(e) => CartError::from(e),
            };
            warn!(model = %item.model, error = %failure, "Stock commit failed, returning stock");
            self.return_stock(&taken).await;
            return Err(failure);
        }
        Ok(taken)
    }

    async fn return_stock(&self, taken: &[ProductQuantityToPay]) {
        for item in taken {
            if let Err(e) = self.catalog.restock(&item.model, item.quantity).await {
                error!(model = %item.model, quantity = item.quantity, error = %e, "Restock failed");
            }
        }
    }
}
