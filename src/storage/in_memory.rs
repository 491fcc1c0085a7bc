//! In-memory implementation of EntityStore for seeded collections

use crate::core::{ConsoleError, Entity, EntityStore, Mutation};
use crate::core::events::{SharedSnapshot, SnapshotBus};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// In-memory store implementation
///
/// Backs the orders and slabs screens with a seeded vector, and serves coupons
/// offline and in tests. Insertion order is preserved; new entities get
/// `max(id) + 1`. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryStore<T: Entity> {
    items: Arc<RwLock<Vec<T>>>,
    bus: Arc<SnapshotBus<T>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Create a store holding `items` in the given order
    pub fn seeded(items: Vec<T>) -> Self {
        Self {
            bus: Arc::new(SnapshotBus::new(items.clone())),
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<T>>, ConsoleError> {
        self.items
            .read()
            .map_err(|e| ConsoleError::Internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<T>>, ConsoleError> {
        self.items
            .write()
            .map_err(|e| ConsoleError::Internal(format!("Failed to acquire write lock: {}", e)))
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn list(&self) -> Vec<T> {
        match self.read() {
            Ok(items) => items.clone(),
            Err(e) => {
                tracing::warn!(entity_type = T::resource_name(), error = %e, "List failed, returning empty collection");
                Vec::new()
            }
        }
    }

    async fn get(&self, id: i64) -> Result<T, ConsoleError> {
        let items = self.read()?;
        items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| ConsoleError::not_found(T::resource_name_singular(), id))
    }

    async fn add(&self, mut draft: T) -> Result<T, ConsoleError> {
        {
            let mut items = self.write()?;
            let next_id = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
            draft.set_id(next_id);
            items.push(draft.clone());
            // Published under the write lock so snapshots land in mutation order
            self.bus.publish(items.clone());
        }

        tracing::debug!(entity_type = T::resource_name_singular(), id = draft.id(), "Entity added");
        Ok(draft)
    }

    async fn update(&self, entity: T) -> Result<Mutation, ConsoleError> {
        {
            let mut items = self.write()?;
            let Some(slot) = items.iter_mut().find(|item| item.id() == entity.id()) else {
                tracing::warn!(
                    entity_type = T::resource_name_singular(),
                    id = entity.id(),
                    "Update skipped, id not found"
                );
                return Ok(Mutation::NotFound);
            };
            *slot = entity;
            self.bus.publish(items.clone());
        }

        Ok(Mutation::Applied)
    }

    async fn delete(&self, id: i64) -> Result<Mutation, ConsoleError> {
        {
            let mut items = self.write()?;
            let before = items.len();
            items.retain(|item| item.id() != id);
            if items.len() == before {
                tracing::warn!(
                    entity_type = T::resource_name_singular(),
                    id,
                    "Delete skipped, id not found"
                );
                return Ok(Mutation::NotFound);
            }
            self.bus.publish(items.clone());
        }

        tracing::debug!(entity_type = T::resource_name_singular(), id, "Entity deleted");
        Ok(Mutation::Applied)
    }

    fn subscribe(&self) -> watch::Receiver<SharedSnapshot<T>> {
        self.bus.subscribe()
    }

    fn close(&self) {
        self.bus.close();
    }
}
