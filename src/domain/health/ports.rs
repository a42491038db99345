use async_trait::async_trait;

use crate::domain::shared::RepositoryError;

/// Probes for infrastructure dependencies
#[async_trait]
pub trait HealthRepository: Send + Sync {
  /// Round-trips a trivial query through the connection pool
  async fn ping_database(&self) -> Result<(), RepositoryError>;
}
