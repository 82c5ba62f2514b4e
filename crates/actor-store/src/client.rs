//! # Table Client
//!
//! The sending half of a table actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle on a `ResourceActor<T>`.
///
/// Every call sends one [`ResourceRequest`] and awaits its one-shot reply. The handle only
/// holds a sender, so clones are cheap and can be passed to any task.
///
/// * `ActorClosed`: the actor stopped before the request was queued.
/// * `ActorDropped`: the actor stopped before it replied.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every record matching `query`, in key order.
    pub async fn find(&self, query: T::Query) -> Result<Vec<(T::Id, T)>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Find { query, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Removes every record; returns how many were removed.
    pub async fn purge(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Purge { respond_to })
            .await
    }
}
