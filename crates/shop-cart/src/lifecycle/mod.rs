//! # System Lifecycle
//!
//! Starting, wiring and stopping the shop.
//!
//! [`ShopSystem::new`] creates the catalog and cart actors, spawns their run loops and builds
//! the [`CartEngine`](crate::engine::CartEngine) on top of their clients. Neither table
//! depends on the other, so both run with an empty context.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: the engine and the system's own client handles.
//! 2. **Actors detect closure**: `receiver.recv()` returns `None` once the last sender is gone.
//! 3. **Actors finish**: queued requests are served, then the final table size is logged.
//! 4. **Await completion**: [`ShopSystem::shutdown`] joins every actor task and reports any
//!    that panicked.
//!
//! ## Configuration
//!
//! [`ShopConfig`](crate::config::ShopConfig) sets the mailbox size, from `SHOP_ACTOR_BUFFER`
//! or the default of 32.

pub mod shop_system;
pub mod tracing;

pub use self::tracing::*;
pub use shop_system::*;
