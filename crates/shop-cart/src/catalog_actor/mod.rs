//! # Catalog Actor
//!
//! The catalog table: one [`Product`] per model, with the stock and price the cart engine
//! consults. Product CRUD proper lives elsewhere; this table only carries what carts need.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](actor_store::ActorEntity) implementation for [`Product`]
//! - [`error`]: [`ProductError`]
//! - [`actions`]: [`ProductAction`] and [`ProductActionResult`]
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shop_cart::catalog_actor;
//! use shop_cart::clients::{Catalog, ProductClient, StockCommit};
//! use shop_cart::model::{Category, ProductCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let model = client
//!         .create_product(ProductCreate::new("iPhone13", Category::Smartphone, Decimal::new(200, 0), 5))
//!         .await?;
//!
//!     let commit = client.decrement_stock(&model, 3).await?;
//!     assert_eq!(commit, StockCommit::Committed { remaining: 2 });
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
