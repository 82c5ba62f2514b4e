//! # Table Actor
//!
//! `ResourceActor<T>` owns one table of `T` records and serves every request for it from a
//! single Tokio task. Requests are handled one at a time, so a request never observes another
//! request half-applied, and no lock guards the table.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a table of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client`.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_store::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { hits: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Query = ();
///     type Context = ();
///     type Error = CounterError;
///
///     fn assign_id(seq: u32, _: &CounterCreate) -> u32 { seq }
///     fn from_create_params(_: u32, _: CounterCreate) -> Result<Self, Self::Error> { Ok(Self { hits: 0 }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Hit).await.unwrap(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: draws the next sequence value, derives the key with `assign_id`, rejects a
///   key that is already present, builds the record, runs `on_create`, inserts it.
/// * **Get** / **Find**: return clones; `Find` walks the table in key order.
/// * **Action**: clones the stored record, runs `handle_action` on the clone and stores the
///   clone only if the action succeeded.
/// * **Delete**: runs `on_delete`, then removes the record.
/// * **Purge**: clears the table and reports how many records were removed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_seq: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_seq: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every hook, which lets a table depend on clients that were
    /// created after this actor was built.
    pub async fn run(mut self, context: T::Context) {
        // "CartRecord" rather than "shop_cart::model::cart::CartRecord"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { query, respond_to } => {
                    let rows: Vec<(T::Id, T)> = self
                        .store
                        .iter()
                        .filter(|(_, item)| item.matches(&query))
                        .map(|(id, item)| (id.clone(), item.clone()))
                        .collect();
                    debug!(entity_type, ?query, rows = rows.len(), "Find");
                    let _ = respond_to.send(Ok(rows));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.apply_action(id, action, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Purge { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Purged");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::assign_id(self.next_seq, &params);
        self.next_seq += 1;

        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Create rejected, key exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn apply_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::ActionResult, FrameworkError> {
        let Some(stored) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut draft = stored.clone();
        match draft.handle_action(action, context).await {
            Ok(result) => {
                self.store.insert(id.clone(), draft);
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed, record unchanged");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    async fn delete(
        &mut self,
        id: T::Id,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<(), FrameworkError> {
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }
}
