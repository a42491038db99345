use std::sync::Arc;

use super::entities::{NewUser, User, UserStatus};
use super::errors::UserError;
use super::ports::UserRepository;
use crate::domain::auth::services::SALT_LENGTH;
use crate::domain::auth::{Password, PasswordHasher, Username};
use crate::domain::habit::HabitRepository;
use crate::domain::shared::{Pagination, RepositoryError};

/// User management service
pub struct UserService {
  user_repo: Arc<dyn UserRepository>,
  habit_repo: Arc<dyn HabitRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    habit_repo: Arc<dyn HabitRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
  ) -> Self {
    Self {
      user_repo,
      habit_repo,
      password_hasher,
    }
  }

  /// Creates an active user directly, bypassing registration
  pub async fn create_user(&self, username: Username, password: Password) -> Result<User, UserError> {
    match self.user_repo.get_by_username(username.as_str()).await {
      Ok(_) => return Err(UserError::AlreadyExists),
      Err(RepositoryError::NotFound) => {}
      Err(e) => return Err(e.into()),
    }

    let salt = self.password_hasher.generate_salt(SALT_LENGTH)?;
    let password_hash = self.password_hasher.hash(&password, &salt);

    let draft = NewUser {
      username: username.into_inner(),
      password_hash,
      salt,
      status: UserStatus::Active,
    };

    let user = self.user_repo.create(draft).await.map_err(map_conflict)?;
    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok(user)
  }

  /// Loads a user with its habits
  pub async fn get_user_by_id(&self, id: i64) -> Result<User, UserError> {
    self.user_repo.get_by_id(id).await.map_err(map_not_found)
  }

  /// Loads a user with its habits
  pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
    self
      .user_repo
      .get_by_username(username)
      .await
      .map_err(map_not_found)
  }

  /// Applies a partial profile update
  ///
  /// Only a present username is applied; an absent one leaves the stored
  /// value untouched.
  pub async fn update_user(&self, id: i64, username: Option<Username>) -> Result<User, UserError> {
    let mut user = self.get_user_by_id(id).await?;

    if let Some(username) = username {
      if username.as_str() != user.username {
        match self.user_repo.get_by_username(username.as_str()).await {
          Ok(_) => return Err(UserError::AlreadyExists),
          Err(RepositoryError::NotFound) => {}
          Err(e) => return Err(e.into()),
        }
        user.rename(username.into_inner());
      }
    }

    let habits = std::mem::take(&mut user.habits);
    let mut updated = self.user_repo.update(user).await.map_err(map_conflict)?;
    updated.habits = habits;

    tracing::info!(user_id = updated.id, "User updated");
    Ok(updated)
  }

  /// Deletes every owned habit, then soft-deletes the user
  ///
  /// Habit deletions are not transactional: the first failure aborts, leaving
  /// earlier habits deleted and the user in place.
  pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
    let user = self.get_user_by_id(id).await?;

    for habit in &user.habits {
      if let Err(e) = self.habit_repo.delete(habit.id).await {
        tracing::error!(
          user_id = user.id,
          habit_id = habit.id,
          error = %e,
          "Cascade delete aborted"
        );
        return Err(e.into());
      }
    }

    self.user_repo.delete(user.id).await.map_err(map_not_found)?;
    tracing::info!(user_id = user.id, habits = user.habits.len(), "User deleted");
    Ok(())
  }

  /// Returns one page of users, without habits
  pub async fn list_users(&self, pagination: Pagination) -> Result<Vec<User>, UserError> {
    Ok(
      self
        .user_repo
        .list(pagination.offset(), pagination.limit())
        .await?,
    )
  }

  /// Number of non-deleted users
  pub async fn count_users(&self) -> Result<i64, UserError> {
    Ok(self.user_repo.count().await?)
  }
}

fn map_not_found(error: RepositoryError) -> UserError {
  match error {
    RepositoryError::NotFound => UserError::NotFound,
    other => UserError::Repository(other),
  }
}

fn map_conflict(error: RepositoryError) -> UserError {
  match error {
    RepositoryError::DuplicateKey(_) => UserError::AlreadyExists,
    RepositoryError::NotFound => UserError::NotFound,
    other => UserError::Repository(other),
  }
}
