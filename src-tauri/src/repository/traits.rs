//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! Implementations talk to the hosted database or keep rows in memory.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. The store assigns ids and timestamps;
/// callers only ever supply content.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity and return it as stored
    async fn create(&self, content: &T::Content) -> DomainResult<T>;

    /// List all entities, newest first
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace the content of the entity with `id`
    ///
    /// A missing id is not an error.
    async fn update(&self, id: T::Id, content: &T::Content) -> DomainResult<()>;

    /// Delete entity by ID. A missing id is not an error.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
