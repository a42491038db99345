use thiserror::Error;

use crate::domain::shared::RepositoryError;

#[derive(Debug, Error)]
pub enum HabitError {
  #[error("Habit not found")]
  NotFound,

  #[error("User not found")]
  UserNotFound,

  #[error("Habit name is required and must be at most {max} characters")]
  InvalidName { max: usize },

  #[error("Habit info is required and must be at most {max} characters")]
  InvalidInfo { max: usize },

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}
