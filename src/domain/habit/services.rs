use std::sync::Arc;

use super::entities::{Habit, NewHabit};
use super::errors::HabitError;
use super::ports::HabitRepository;
use crate::domain::shared::{Pagination, RepositoryError};
use crate::domain::user::UserRepository;

/// Habit management service
pub struct HabitService {
  habit_repo: Arc<dyn HabitRepository>,
  user_repo: Arc<dyn UserRepository>,
}

impl HabitService {
  pub fn new(habit_repo: Arc<dyn HabitRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
    Self {
      habit_repo,
      user_repo,
    }
  }

  /// Creates a habit owned by an existing user
  ///
  /// # Errors
  /// Returns `HabitError::UserNotFound` without inserting anything when the
  /// owner does not exist
  pub async fn create_habit(
    &self,
    user_id: i64,
    name: String,
    info: String,
  ) -> Result<Habit, HabitError> {
    let draft = NewHabit::new(user_id, name, info)?;

    let mut owner = self.user_repo.get_by_id(user_id).await.map_err(map_owner)?;
    let habit = self.habit_repo.create(draft).await.map_err(map_owner)?;
    owner.attach_habit(habit.clone());

    tracing::info!(
      user_id = owner.id,
      habit_id = habit.id,
      habits = owner.habits.len(),
      "Habit created"
    );

    Ok(habit)
  }

  pub async fn get_habit_by_id(&self, id: i64) -> Result<Habit, HabitError> {
    self.habit_repo.get_by_id(id).await.map_err(map_habit)
  }

  /// Applies a partial update; empty fields keep their stored values
  pub async fn update_habit(
    &self,
    id: i64,
    name: Option<String>,
    info: Option<String>,
  ) -> Result<Habit, HabitError> {
    let mut habit = self.get_habit_by_id(id).await?;
    habit.apply_changes(name, info)?;

    let updated = self.habit_repo.update(habit).await.map_err(map_habit)?;
    tracing::info!(habit_id = updated.id, "Habit updated");
    Ok(updated)
  }

  /// Deletes a habit through its owner's collection
  ///
  /// # Errors
  /// Returns `HabitError::NotFound` when the habit is not in the user's
  /// collection, even if a habit with that id exists for another user
  pub async fn delete_habit(&self, user_id: i64, habit_id: i64) -> Result<(), HabitError> {
    let mut owner = self.user_repo.get_by_id(user_id).await.map_err(map_owner)?;

    let habit = owner.detach_habit(habit_id).ok_or(HabitError::NotFound)?;
    self.habit_repo.delete(habit.id).await.map_err(map_habit)?;

    tracing::info!(
      user_id = owner.id,
      habit_id = habit.id,
      habits = owner.habits.len(),
      "Habit deleted"
    );
    Ok(())
  }

  /// Returns one page across all users
  pub async fn list_habits(&self, pagination: Pagination) -> Result<Vec<Habit>, HabitError> {
    Ok(
      self
        .habit_repo
        .list(pagination.offset(), pagination.limit())
        .await?,
    )
  }

  pub async fn count_habits(&self) -> Result<i64, HabitError> {
    Ok(self.habit_repo.count().await?)
  }
}

fn map_owner(error: RepositoryError) -> HabitError {
  match error {
    RepositoryError::NotFound | RepositoryError::MissingReference(_) => HabitError::UserNotFound,
    other => HabitError::Repository(other),
  }
}

fn map_habit(error: RepositoryError) -> HabitError {
  match error {
    RepositoryError::NotFound => HabitError::NotFound,
    other => HabitError::Repository(other),
  }
}
