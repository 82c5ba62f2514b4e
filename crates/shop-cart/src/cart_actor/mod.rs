//! # Cart Actor
//!
//! The cart table. Each [`CartRecord`] is one cart row plus the lines it owns, keyed by a
//! surrogate [`CartId`](crate::model::CartId) drawn from the table sequence.
//!
//! ## Writes
//!
//! Line and total changes are [`CartWrite`]s submitted in a batch through
//! [`CartAction::Apply`]. The batch runs on a working copy, so a workflow that pairs a line
//! change with a total adjustment commits both or neither. The table refuses:
//!
//! - any write to a paid cart,
//! - a second line for the same model,
//! - adjusting or deleting a line that does not exist,
//! - a line quantity below 1,
//! - a negative total.
//!
//! Refusals reach callers as [`CartRecordError`] inside a
//! [`FrameworkError::EntityError`](actor_store::FrameworkError::EntityError).
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](actor_store::ActorEntity) implementation for [`CartRecord`]
//! - [`actions`]: [`CartCreate`], [`CartQuery`], [`CartWrite`], [`CartAction`]
//! - [`error`]: [`CartRecordError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::CartRecord;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartRecord>, ResourceClient<CartRecord>) {
    ResourceActor::new(buffer_size)
}
