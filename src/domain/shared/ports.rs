use async_trait::async_trait;

use super::errors::RepositoryError;

/// An entity with a store-assigned identifier
///
/// `Draft` is the shape handed to `create` before the store has assigned an
/// identifier, so an unsaved entity can never reach `update`.
pub trait Entity: Send + Sync + 'static {
  type Draft: Send + 'static;

  /// Store-assigned identifier
  fn id(&self) -> i64;
}

/// Generic persistence operations shared by every entity type
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
  /// Inserts a new row and returns the stored entity
  async fn create(&self, draft: E::Draft) -> Result<E, RepositoryError>;

  /// Fetches a single entity, `RepositoryError::NotFound` when absent
  async fn get_by_id(&self, id: i64) -> Result<E, RepositoryError>;

  /// Writes every mutable column of an already stored entity
  async fn update(&self, entity: E) -> Result<E, RepositoryError>;

  /// Removes the row with the given identifier
  async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

  /// Returns one page in insertion order
  async fn list(&self, offset: i64, limit: i64) -> Result<Vec<E>, RepositoryError>;

  /// Total number of rows
  async fn count(&self) -> Result<i64, RepositoryError>;
}
