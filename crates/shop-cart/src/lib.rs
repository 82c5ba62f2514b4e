//! # Shop Cart
//!
//! Cart lifecycle and checkout for a single-node shop. Carts accumulate lines, keep a running
//! total in step with them, and turn into paid, immutable history at checkout once stock has
//! been confirmed and taken.
//!
//! - **[model]**: carts, lines, products and the read-side [`CurrentCart`](model::CurrentCart).
//! - **[catalog_actor]** / **[cart_actor]**: the two tables, each owned by an actor.
//! - **[clients]**: typed clients; [`CartClient`](clients::CartClient) is the cart repository,
//!   [`Catalog`](clients::Catalog) the seam to the product catalog.
//! - **[engine]**: [`CartEngine`](engine::CartEngine), the workflows.
//! - **[lifecycle]**: [`ShopSystem`](lifecycle::ShopSystem) and tracing setup.
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shop_cart::config::ShopConfig;
//! use shop_cart::lifecycle::ShopSystem;
//! use shop_cart::model::{Category, ProductCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ShopSystem::new(&ShopConfig::default());
//!     let model = system
//!         .product_client
//!         .create_product(ProductCreate::new("iPhone13", Category::Smartphone, Decimal::new(200, 0), 5))
//!         .await?;
//!
//!     system.engine.add_to_cart("ana", &model).await?;
//!     system.engine.add_to_cart("ana", &model).await?;
//!     system.engine.checkout("ana").await?;
//!
//!     let history = system.engine.get_customer_carts("ana").await?;
//!     assert_eq!(history[0].total, Decimal::new(400, 0));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod locks;
pub mod model;
