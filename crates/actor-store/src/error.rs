//! # Store Errors
//!
//! Errors raised by the store itself, as opposed to the domain errors a caller builds on
//! top of it. Callers treat every variant as a storage failure for the current request.

/// Errors that can occur within the actor store.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// A record rejected the request (constraint violation or invalid input).
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the record's own error if this is an `EntityError` of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(e) => e.downcast_ref::<E>(),
            _ => None,
        }
    }
}
