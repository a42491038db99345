use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::table::{PgTable, TableRow};
use crate::domain::habit::{Habit, HabitRepository, NewHabit};
use crate::domain::shared::{Repository, RepositoryError};

/// Database row structure for habits table
#[derive(Debug, FromRow)]
struct HabitRow {
  id: i64,
  name: String,
  info: String,
  user_id: i64,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TableRow for HabitRow {
  const TABLE: &'static str = "habits";
  const COLUMNS: &'static str = "id, name, info, user_id, created_at, updated_at";
  const SOFT_DELETE: bool = false;
}

impl From<HabitRow> for Habit {
  fn from(row: HabitRow) -> Self {
    Habit {
      id: row.id,
      name: row.name,
      info: row.info,
      user_id: row.user_id,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

/// Loads every habit owned by a user in insertion order
pub(super) async fn fetch_for_owner(
  pool: &PgPool,
  user_id: i64,
) -> Result<Vec<Habit>, RepositoryError> {
  let rows = sqlx::query_as::<_, HabitRow>(
    r#"
            SELECT id, name, info, user_id, created_at, updated_at
            FROM habits
            WHERE user_id = $1
            ORDER BY id
            "#,
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  Ok(rows.into_iter().map(Habit::from).collect())
}

/// PostgreSQL implementation of the HabitRepository trait
pub struct PostgresHabitRepository {
  table: PgTable<HabitRow>,
}

impl PostgresHabitRepository {
  pub fn new(pool: PgPool) -> Self {
    Self {
      table: PgTable::new(pool),
    }
  }
}

#[async_trait]
impl Repository<Habit> for PostgresHabitRepository {
  async fn create(&self, draft: NewHabit) -> Result<Habit, RepositoryError> {
    let row = sqlx::query_as::<_, HabitRow>(
      r#"
            INSERT INTO habits (name, info, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, info, user_id, created_at, updated_at
            "#,
    )
    .bind(&draft.name)
    .bind(&draft.info)
    .bind(draft.user_id)
    .fetch_one(self.table.pool())
    .await?;

    Ok(row.into())
  }

  async fn get_by_id(&self, id: i64) -> Result<Habit, RepositoryError> {
    Ok(self.table.fetch_by_id(id).await?.into())
  }

  async fn update(&self, habit: Habit) -> Result<Habit, RepositoryError> {
    let row = sqlx::query_as::<_, HabitRow>(
      r#"
            UPDATE habits
            SET
                name = $2,
                info = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, info, user_id, created_at, updated_at
            "#,
    )
    .bind(habit.id)
    .bind(&habit.name)
    .bind(&habit.info)
    .bind(habit.updated_at)
    .fetch_optional(self.table.pool())
    .await?;

    row.map(Habit::from).ok_or(RepositoryError::NotFound)
  }

  async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
    self.table.delete(id).await
  }

  async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Habit>, RepositoryError> {
    let rows = self.table.list(offset, limit).await?;
    Ok(rows.into_iter().map(Habit::from).collect())
  }

  async fn count(&self) -> Result<i64, RepositoryError> {
    self.table.count().await
  }
}

impl HabitRepository for PostgresHabitRepository {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::user::{NewUser, UserRepository, UserStatus};
  use crate::infrastructure::persistence::postgres::PostgresUserRepository;
  use crate::infrastructure::persistence::postgres::test_db::setup_test_db;

  async fn insert_user(pool: &PgPool, username: &str) -> i64 {
    PostgresUserRepository::new(pool.clone())
      .create(NewUser {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        salt: "salt".to_string(),
        status: UserStatus::Active,
      })
      .await
      .unwrap()
      .id
  }

  fn draft(user_id: i64, name: &str) -> NewHabit {
    NewHabit::new(user_id, name.to_string(), "info".to_string()).unwrap()
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_and_get_habit() {
    let (pool, _container) = setup_test_db().await;
    let user_id = insert_user(&pool, "alice").await;
    let repo = PostgresHabitRepository::new(pool);

    let created = repo.create(draft(user_id, "Run")).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.user_id, user_id);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_for_missing_owner_violates_foreign_key() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresHabitRepository::new(pool);

    let result = repo.create(draft(12345, "Run")).await;
    assert!(matches!(result, Err(RepositoryError::MissingReference(_))));
    assert_eq!(repo.count().await.unwrap(), 0);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_update_missing_habit_is_not_found() {
    let (pool, _container) = setup_test_db().await;
    let user_id = insert_user(&pool, "alice").await;
    let repo = PostgresHabitRepository::new(pool);

    let mut habit = repo.create(draft(user_id, "Run")).await.unwrap();
    repo.delete(habit.id).await.unwrap();
    habit.name = "Jog".to_string();

    assert!(repo.update(habit).await.unwrap_err().is_not_found());
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_hard_delete_and_paging() {
    let (pool, _container) = setup_test_db().await;
    let user_id = insert_user(&pool, "alice").await;
    let repo = PostgresHabitRepository::new(pool.clone());

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
      ids.push(repo.create(draft(user_id, name)).await.unwrap().id);
    }

    let page = repo.list(1, 2).await.unwrap();
    assert_eq!(page.iter().map(|h| h.id).collect::<Vec<_>>(), ids[1..].to_vec());

    repo.delete(ids[0]).await.unwrap();
    assert!(repo.delete(ids[0]).await.unwrap_err().is_not_found());
    assert_eq!(repo.count().await.unwrap(), 2);

    let owned = fetch_for_owner(&pool, user_id).await.unwrap();
    assert_eq!(owned.len(), 2);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_owner_lookup_loads_habits() {
    let (pool, _container) = setup_test_db().await;
    let user_id = insert_user(&pool, "alice").await;
    let repo = PostgresHabitRepository::new(pool.clone());
    repo.create(draft(user_id, "Run")).await.unwrap();

    let user = PostgresUserRepository::new(pool)
      .get_by_username("alice")
      .await
      .unwrap();
    assert_eq!(user.habits.len(), 1);
    assert_eq!(user.habits[0].name, "Run");
  }
}
