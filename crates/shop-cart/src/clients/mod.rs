//! Typed wrappers around [`ResourceClient`](actor_store::ResourceClient).

pub mod cart_client;
pub mod catalog;
pub mod product_client;

pub use cart_client::*;
pub use catalog::*;
pub use product_client::*;
