//! # Actor Store
//!
//! Actor-owned, in-memory tables. Each table is a [`ResourceActor`] running in its own Tokio
//! task; callers talk to it through a cloneable [`ResourceClient`]. Because one task owns the
//! table and handles requests in arrival order, every request sees the table in a consistent
//! state without any locking.
//!
//! ## Layers
//!
//! 1. **Record** ([`ActorEntity`]): the row type, its key, its atomic actions, its query.
//! 2. **Runtime** ([`ResourceActor`]): the table and the message loop.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/response calls.
//!
//! ## Atomicity
//!
//! An action runs against a clone of the stored record and is committed only on `Ok`. A
//! record type that wants several writes to land together expresses them as one action:
//!
//! ```rust
//! use actor_store::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Account { balance: i64 }
//! #[derive(Debug)] struct Open(i64);
//! #[derive(Debug)] enum Posting { Batch(Vec<i64>) }
//! #[derive(Debug, thiserror::Error)] #[error("overdrawn")] struct Overdrawn;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u32; type Create = Open; type Action = Posting;
//!     type ActionResult = i64; type Query = (); type Context = (); type Error = Overdrawn;
//!
//!     fn assign_id(seq: u32, _: &Open) -> u32 { seq }
//!     fn from_create_params(_: u32, open: Open) -> Result<Self, Self::Error> {
//!         Ok(Self { balance: open.0 })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn handle_action(&mut self, action: Posting, _: &()) -> Result<i64, Self::Error> {
//!         let Posting::Batch(amounts) = action;
//!         for amount in amounts {
//!             self.balance += amount;
//!             if self.balance < 0 { return Err(Overdrawn); }
//!         }
//!         Ok(self.balance)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Account>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(Open(10)).await.unwrap();
//!     let err = client.perform_action(id, Posting::Batch(vec![5, -30])).await.unwrap_err();
//!     assert!(err.entity_error::<Overdrawn>().is_some());
//!
//!     // The +5 was applied to the working copy only.
//!     assert_eq!(client.get(id).await.unwrap().unwrap().balance, 10);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies reach a table at `run(context)` time rather than at construction, so tables can
//! be built first and wired afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], which answers a real client's requests
//! from scripted replies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
