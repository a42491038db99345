use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::habit_repository::fetch_for_owner;
use super::table::{PgTable, TableRow};
use crate::domain::shared::{Repository, RepositoryError};
use crate::domain::user::{NewUser, User, UserRepository, UserStatus};

/// Database row structure for users table
#[derive(Debug, FromRow)]
struct UserRow {
  id: i64,
  username: String,
  password_hash: String,
  salt: String,
  status: i16,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl TableRow for UserRow {
  const TABLE: &'static str = "users";
  const COLUMNS: &'static str =
    "id, username, password_hash, salt, status, created_at, updated_at, deleted_at";
  const SOFT_DELETE: bool = true;
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User {
      id: row.id,
      username: row.username,
      password_hash: row.password_hash,
      salt: row.salt,
      status: UserStatus::from_i16(row.status),
      created_at: row.created_at,
      updated_at: row.updated_at,
      deleted_at: row.deleted_at,
      habits: Vec::new(),
    }
  }
}

/// PostgreSQL implementation of the UserRepository trait
///
/// Users are soft-deleted; every read filters out rows with `deleted_at` set.
pub struct PostgresUserRepository {
  table: PgTable<UserRow>,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self {
      table: PgTable::new(pool),
    }
  }

  async fn with_habits(&self, row: UserRow) -> Result<User, RepositoryError> {
    let mut user = User::from(row);
    user.habits = fetch_for_owner(self.table.pool(), user.id).await?;
    Ok(user)
  }
}

#[async_trait]
impl Repository<User> for PostgresUserRepository {
  async fn create(&self, draft: NewUser) -> Result<User, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (username, password_hash, salt, status)
            VALUES ($1, $2, $3, $4)
            RETURNING
                id,
                username,
                password_hash,
                salt,
                status,
                created_at,
                updated_at,
                deleted_at
            "#,
    )
    .bind(&draft.username)
    .bind(&draft.password_hash)
    .bind(&draft.salt)
    .bind(draft.status.as_i16())
    .fetch_one(self.table.pool())
    .await?;

    Ok(row.into())
  }

  async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
    let row = self.table.fetch_by_id(id).await?;
    self.with_habits(row).await
  }

  async fn update(&self, user: User) -> Result<User, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            UPDATE users
            SET
                username = $2,
                password_hash = $3,
                salt = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING
                id,
                username,
                password_hash,
                salt,
                status,
                created_at,
                updated_at,
                deleted_at
            "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.salt)
    .bind(user.status.as_i16())
    .bind(user.updated_at)
    .fetch_optional(self.table.pool())
    .await?;

    row.map(User::from).ok_or(RepositoryError::NotFound)
  }

  async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
    self.table.delete(id).await
  }

  async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, RepositoryError> {
    let rows = self.table.list(offset, limit).await?;
    Ok(rows.into_iter().map(User::from).collect())
  }

  async fn count(&self) -> Result<i64, RepositoryError> {
    self.table.count().await
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT
                id,
                username,
                password_hash,
                salt,
                status,
                created_at,
                updated_at,
                deleted_at
            FROM users
            WHERE username = $1 AND deleted_at IS NULL
            "#,
    )
    .bind(username)
    .fetch_optional(self.table.pool())
    .await?
    .ok_or(RepositoryError::NotFound)?;

    self.with_habits(row).await
  }
}
