//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP types in any signature
//! - Stores are minimal and CRUD-focused
//! - Identifier allocation belongs to the store

pub mod entity_store;

use thiserror::Error;

use crate::domain::ResourceKind;

pub use entity_store::{BuildFn, EntityStore, MutateFn, StoreError};

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// No entity of `kind` with identifier `id`.
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },

    /// Request payload could not be decoded. Carries the raw parser message.
    #[error("{0}")]
    MalformedPayload(String),

    /// Store failure other than a missing entity.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Map a store error for an entity of `kind`.
    pub fn from_store(kind: ResourceKind, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound { kind, id },
            StoreError::Internal(msg) => Self::Storage(msg),
        }
    }
}
