//! Resource service - create/list/get/update/delete/toggle for one kind.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Entity, ListFilter};
use crate::ports::{CoreError, EntityStore};

/// Service for one resource kind.
///
/// Generic over the entity so every kind shares the same lifecycle rules:
/// store-assigned identity, forced-enabled creation, partial updates and
/// explicit set-state toggles.
pub struct ResourceService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
}

impl<E: Entity> ResourceService<E> {
    /// Create a new service over `store`.
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self {
        Self { store }
    }

    /// Create an entity from a caller payload.
    pub async fn create(&self, payload: E::Create) -> Result<E, CoreError> {
        let created = self
            .store
            .insert_with(Box::new(move |id| E::from_create(id, payload, Utc::now())))
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))?;

        tracing::info!(kind = %E::KIND, id = %created.id(), "created");
        Ok(created)
    }

    /// List entities passing `filter`, oldest first.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<E>, CoreError> {
        let mut entities: Vec<E> = self
            .store
            .list()
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))?
            .into_iter()
            .filter(|entity| filter.admits(entity))
            .collect();
        entities.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        tracing::debug!(kind = %E::KIND, count = entities.len(), "listed");
        Ok(entities)
    }

    /// Get an entity by identifier.
    pub async fn get(&self, id: &str) -> Result<E, CoreError> {
        self.store
            .get(id)
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))
    }

    /// Apply a partial update and refresh the update timestamp.
    pub async fn update(&self, id: &str, patch: E::Update) -> Result<E, CoreError> {
        let updated = self
            .store
            .modify(
                id,
                Box::new(move |entity: &mut E| {
                    entity.apply_update(patch);
                    entity.touch();
                }),
            )
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))?;

        tracing::info!(kind = %E::KIND, id, "updated");
        Ok(updated)
    }

    /// Remove an entity permanently.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.store
            .remove(id)
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))?;

        tracing::info!(kind = %E::KIND, id, "deleted");
        Ok(())
    }

    /// Set the enabled flag to `activate` (not a flip) and refresh the
    /// update timestamp.
    pub async fn toggle(&self, id: &str, activate: bool) -> Result<E, CoreError> {
        let toggled = self
            .store
            .modify(
                id,
                Box::new(move |entity: &mut E| {
                    entity.set_enabled(activate);
                    entity.touch();
                }),
            )
            .await
            .map_err(|e| CoreError::from_store(E::KIND, e))?;

        tracing::info!(kind = %E::KIND, id, activate, "toggled");
        Ok(toggled)
    }

    /// Fail with `NotFound` unless `id` exists.
    pub async fn ensure_exists(&self, id: &str) -> Result<(), CoreError> {
        self.get(id).await.map(|_| ())
    }
}
