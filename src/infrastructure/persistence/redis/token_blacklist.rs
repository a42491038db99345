use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::auth::errors::BlacklistError;
use crate::domain::auth::ports::TokenBlacklist;

/// Revoked token identifiers kept as plain redis keys
///
/// Keys never expire, so the set only grows.
pub struct RedisTokenBlacklist {
  connection: ConnectionManager,
}

impl RedisTokenBlacklist {
  pub fn new(connection: ConnectionManager) -> Self {
    Self { connection }
  }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
  async fn revoke(&self, token_id: &str) -> Result<(), BlacklistError> {
    let mut connection = self.connection.clone();
    connection.set::<_, _, ()>(token_id, 1).await?;
    Ok(())
  }

  async fn is_revoked(&self, token_id: &str) -> Result<bool, BlacklistError> {
    let mut connection = self.connection.clone();
    let exists: bool = connection.exists(token_id).await?;
    Ok(exists)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use testcontainers_modules::redis::{REDIS_PORT, Redis};
  use testcontainers_modules::testcontainers::runners::AsyncRunner;

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_revoke_then_is_revoked() {
    let container = Redis::default()
      .start()
      .await
      .expect("Failed to start redis container");
    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(REDIS_PORT)
      .await
      .expect("Failed to get port");

    let client = redis::Client::open(format!("redis://{}:{}", host, port)).unwrap();
    let manager = client.get_connection_manager().await.unwrap();
    let blacklist = RedisTokenBlacklist::new(manager.clone());

    assert!(!blacklist.is_revoked("jti-1").await.unwrap());
    blacklist.revoke("jti-1").await.unwrap();
    assert!(blacklist.is_revoked("jti-1").await.unwrap());
    assert!(!blacklist.is_revoked("jti-2").await.unwrap());

    let mut connection = manager;
    let ttl: i64 = redis::cmd("TTL")
      .arg("jti-1")
      .query_async(&mut connection)
      .await
      .unwrap();
    assert_eq!(ttl, -1);
  }
}
