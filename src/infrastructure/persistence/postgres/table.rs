use std::marker::PhantomData;

use sqlx::PgPool;
use sqlx::postgres::PgRow;

use crate::domain::shared::RepositoryError;

/// Row type stored in a single table keyed by a `BIGSERIAL id`
pub trait TableRow: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin + 'static {
  /// Table name
  const TABLE: &'static str;
  /// Comma-separated column list matching the row struct
  const COLUMNS: &'static str;
  /// Whether rows carry a `deleted_at` marker instead of being removed
  const SOFT_DELETE: bool;
}

/// Id-keyed reads, deletes, paging and counting shared by every table
pub struct PgTable<R: TableRow> {
  pool: PgPool,
  _row: PhantomData<fn() -> R>,
}

impl<R: TableRow> PgTable<R> {
  pub fn new(pool: PgPool) -> Self {
    Self {
      pool,
      _row: PhantomData,
    }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }

  fn live_clause(prefix: &str) -> String {
    if R::SOFT_DELETE {
      format!(" {} deleted_at IS NULL", prefix)
    } else {
      String::new()
    }
  }

  /// Fetches a live row by id
  pub async fn fetch_by_id(&self, id: i64) -> Result<R, RepositoryError> {
    let sql = format!(
      "SELECT {} FROM {} WHERE id = $1{}",
      R::COLUMNS,
      R::TABLE,
      Self::live_clause("AND")
    );

    sqlx::query_as::<_, R>(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(RepositoryError::NotFound)
  }

  /// Soft- or hard-deletes a row, `NotFound` if nothing matched
  pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
    let sql = if R::SOFT_DELETE {
      format!(
        "UPDATE {} SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        R::TABLE
      )
    } else {
      format!("DELETE FROM {} WHERE id = $1", R::TABLE)
    };

    let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

    if result.rows_affected() == 0 {
      Err(RepositoryError::NotFound)
    } else {
      Ok(())
    }
  }

  /// Returns live rows in id order
  pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<R>, RepositoryError> {
    let sql = format!(
      "SELECT {} FROM {}{} ORDER BY id LIMIT $1 OFFSET $2",
      R::COLUMNS,
      R::TABLE,
      Self::live_clause("WHERE")
    );

    let rows = sqlx::query_as::<_, R>(&sql)
      .bind(limit)
      .bind(offset)
      .fetch_all(&self.pool)
      .await?;

    Ok(rows)
  }

  /// Number of live rows
  pub async fn count(&self) -> Result<i64, RepositoryError> {
    let sql = format!(
      "SELECT COUNT(*) FROM {}{}",
      R::TABLE,
      Self::live_clause("WHERE")
    );

    let count = sqlx::query_scalar::<_, i64>(&sql)
      .fetch_one(&self.pool)
      .await?;

    Ok(count)
  }
}
