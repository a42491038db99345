use thiserror::Error;

use crate::domain::auth::{HashError, ValueObjectError};
use crate::domain::shared::RepositoryError;

#[derive(Debug, Error)]
pub enum UserError {
  #[error("User not found")]
  NotFound,

  #[error("Username already exists")]
  AlreadyExists,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}
