//! In-memory entity store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Entity;
use crate::ports::{BuildFn, EntityStore, MutateFn, StoreError};

/// Process-lifetime store backed by a `HashMap`.
///
/// Identifiers are `"<kind>-<n>"` with `n` taken from a counter that only
/// moves forward, so a deleted identifier stays unresolvable.
pub struct InMemoryStore<E: Entity> {
    entities: RwLock<HashMap<String, E>>,
    next_id: AtomicU64,
}

impl<E: Entity> InMemoryStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        E::KIND.format_id(n)
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn insert_with(&self, build: BuildFn<E>) -> Result<E, StoreError> {
        let mut entities = self.entities.write().await;
        let id = self.allocate_id();
        let entity = build(id.clone());
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<E, StoreError> {
        self.entities
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn modify(&self, id: &str, mutate: MutateFn<E>) -> Result<E, StoreError> {
        let mut entities = self.entities.write().await;
        let entity = entities
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        mutate(entity);
        Ok(entity.clone())
    }

    async fn remove(&self, id: &str) -> Result<E, StoreError> {
        self.entities
            .write()
            .await
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
