//! # Mock Tables
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of a table. Code written against the client cannot
//! tell the difference, which makes it the easy way to inject storage failures.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real table |
//! | **Error injection** | `return_err(..)` | needs a contrived table state |
//! | **Use case** | logic *around* a client | the record type itself, full system |
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Seat { taken: bool }
//! #[derive(Debug)] struct SeatCreate;
//! #[derive(Debug)] enum SeatAction { Take }
//! #[derive(Debug, thiserror::Error)] #[error("seat taken")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Create = SeatCreate; type Action = SeatAction;
//!     type ActionResult = (); type Query = (); type Context = (); type Error = SeatError;
//!     fn assign_id(seq: u32, _: &SeatCreate) -> u32 { seq }
//!     fn from_create_params(_: u32, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { taken: false }) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> {
//!         if self.taken { return Err(SeatError); }
//!         self.taken = true;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_action(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let result = client.perform_action(7, SeatAction::Take).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the request payload itself, [`create_mock_client`] returns the raw
//! receiver; pair it with [`expect_create`], [`expect_find`] or [`expect_action`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, matched against requests in FIFO order.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Find(Result<Vec<(T::Id, T)>, FrameworkError>),
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Purge(Result<usize, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<I: PartialEq + std::fmt::Debug>(expected: &I, actual: &I) {
    assert_eq!(expected, actual, "mock called with an unexpected id");
}

/// A mock table with expectation tracking.
///
/// Requests that arrive in a different order than the expectations, or with a different key,
/// panic the mock task; the caller then sees `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        reply(respond_to, r)
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, response)
                    }
                    (ResourceRequest::Find { respond_to, .. }, Some(Expectation::Find(r))) => {
                        reply(respond_to, r)
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, response)
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, response)
                    }
                    (ResourceRequest::Purge { respond_to }, Some(Expectation::Purge(r))) => {
                        reply(respond_to, r)
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `find` request with any query.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<(T::Id, T)>> {
        self.builder(Expectation::Find)
    }

    /// Expects an `action` request on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects a `purge` request.
    pub fn expect_purge(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Expectation::Purge)
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its mailbox.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on their payloads and
/// answers through the enclosed `respond_to` sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Find request.
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<Vec<(T::Id, T)>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
