use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::health::HealthRepository;
use crate::domain::shared::RepositoryError;

/// Health probes backed by the connection pool
pub struct PostgresHealthRepository {
  pool: PgPool,
}

impl PostgresHealthRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl HealthRepository for PostgresHealthRepository {
  async fn ping_database(&self) -> Result<(), RepositoryError> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::test_db::setup_test_db;

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_ping_database() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresHealthRepository::new(pool.clone());

    assert!(repo.ping_database().await.is_ok());

    pool.close().await;
    assert!(repo.ping_database().await.is_err());
  }
}
