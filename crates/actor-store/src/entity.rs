//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type fulfils to live in a
//! [`ResourceActor`](crate::ResourceActor) table. It names the key, the creation payload,
//! the record-specific actions, and the query type used to select rows.
//!
//! # Keys
//! Every table owns a monotonically increasing sequence. [`ActorEntity::assign_id`] turns
//! that sequence value (and the creation payload) into the record key, so a table can use
//! surrogate keys (`CartId(seq)`) or natural keys (a product model) with the same actor.
//!
//! # Atomic Actions
//! [`ActorEntity::handle_action`] always runs against a working copy of the stored record.
//! The actor swaps the copy in only when the action returns `Ok`, so an action that applies
//! several changes and then fails leaves no trace.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be stored by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook when the actor starts (`run(context)`), not when it is built.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The record key. Ordered so that table scans are deterministic.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Enum of record-specific operations (e.g. `DecrementStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Selection criteria for [`ResourceRequest::Find`](crate::ResourceRequest::Find).
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One enum per table rather than one per action: callers match on a single type and
    /// storage constraint violations all travel through the same channel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derives the key of a new record from the table sequence and the payload.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Construct the full record from its key and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the record is removed by a single `Delete`.
    /// `Purge` skips this hook.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action against a working copy of the record.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
