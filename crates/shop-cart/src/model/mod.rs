//! Domain model: plain data, no behaviour beyond small helpers.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
