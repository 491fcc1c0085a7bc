//! Store trait for entity collections

use crate::core::error::ConsoleError;
use crate::core::events::SharedSnapshot;
use crate::core::entity::Entity;
use async_trait::async_trait;
use tokio::sync::watch;

/// Result of an update or delete.
///
/// Referencing an unknown id is a warning, not a failure: the operation is a
/// no-op and the caller gets `NotFound` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    NotFound,
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied)
    }
}

/// Store trait owning the authoritative collection of one entity kind
///
/// Implementations are either a proxy over a REST endpoint or a seeded
/// in-memory vector. Every mutating operation republishes the full collection
/// to subscribers.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// List all entities. Never fails: transport errors degrade to an empty list.
    async fn list(&self) -> Vec<T>;

    /// Get an entity by ID
    async fn get(&self, id: i64) -> Result<T, ConsoleError>;

    /// Create a new entity, assigning its identity
    async fn add(&self, draft: T) -> Result<T, ConsoleError>;

    /// Replace an existing entity by ID
    async fn update(&self, entity: T) -> Result<Mutation, ConsoleError>;

    /// Delete an entity by ID
    async fn delete(&self, id: i64) -> Result<Mutation, ConsoleError>;

    /// Subscribe to the current collection
    fn subscribe(&self) -> watch::Receiver<SharedSnapshot<T>>;

    /// Explicit teardown of the store's broadcast
    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_is_applied() {
        assert!(Mutation::Applied.is_applied());
        assert!(!Mutation::NotFound.is_applied());
    }
}
