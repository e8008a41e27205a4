//! Entity store trait and error types.
//!
//! This module defines the storage abstraction for one resource kind.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Entity;

/// Errors for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the given identifier.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Storage backend failure.
    #[error("Storage error: {0}")]
    Internal(String),
}

/// Builds an entity from the identifier the store allocated.
pub type BuildFn<E> = Box<dyn FnOnce(String) -> E + Send>;

/// Mutates an entity in place.
pub type MutateFn<E> = Box<dyn FnOnce(&mut E) + Send>;

/// Storage for one resource kind.
///
/// # Design Rules
///
/// - The store owns identifier allocation; ids come from a per-kind
///   monotonic counter and are never reused, even after deletion
/// - `insert_with` and `modify` run their closure under a single write
///   acquisition so each operation is atomic
/// - No ordering guarantee for `list`
///
/// # Example
///
/// ```ignore
/// let gw = store
///     .insert_with(Box::new(|id| Gateway::from_create(id, payload, now)))
///     .await?;
/// let found = store.get(&gw.id).await?;
/// ```
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Allocate an identifier, build the entity with it and store it.
    ///
    /// Returns the stored entity.
    async fn insert_with(&self, build: BuildFn<E>) -> Result<E, StoreError>;

    /// Get an entity by identifier.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entity with the given id exists
    async fn get(&self, id: &str) -> Result<E, StoreError>;

    /// List every stored entity.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    /// Apply `mutate` to the stored entity and return the result.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entity with the given id exists
    async fn modify(&self, id: &str, mutate: MutateFn<E>) -> Result<E, StoreError>;

    /// Remove an entity, returning it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entity with the given id exists
    async fn remove(&self, id: &str) -> Result<E, StoreError>;
}
