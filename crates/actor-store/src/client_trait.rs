//! # ActorClient Trait
//!
//! A common interface for table-specific clients. Implementors wrap a [`ResourceClient`]
//! and pick their own error type; `get`, `find` and `delete` come for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit the plain table operations.
///
/// # Example
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Tag { name: String }
/// #[derive(Debug)] struct TagCreate(String);
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = String;
///     type Create = TagCreate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn assign_id(_: u32, params: &TagCreate) -> String { params.0.clone() }
///     fn from_create_params(name: String, _: TagCreate) -> Result<Self, Self::Error> {
///         Ok(Self { name })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn handle_action(&mut self, action: TagAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.get("rust".to_string()).await;
///     let _ = client.find(()).await;
///     let _ = client.delete("rust".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The table-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the table-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record matching `query`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, query: T::Query) -> Result<Vec<(T::Id, T)>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(query).await.map_err(Self::map_error)
    }

    /// Delete a record by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
