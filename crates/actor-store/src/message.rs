//! # Store Messages
//!
//! The request enum exchanged between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests a table actor understands.
///
/// The set mirrors what a single relational table offers its callers:
///
/// - **Create**: insert a row keyed by [`ActorEntity::assign_id`].
/// - **Get**: point lookup by key.
/// - **Find**: scan with an [`ActorEntity::Query`], rows returned in key order.
/// - **Action**: atomic, record-specific mutation (see [`ActorEntity::handle_action`]).
/// - **Delete**: remove one row.
/// - **Purge**: remove every row (administrative reset).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        query: T::Query,
        respond_to: Response<Vec<(T::Id, T)>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Purge {
        respond_to: Response<usize>,
    },
}
