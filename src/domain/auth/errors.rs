use thiserror::Error;

use super::value_objects::ValueObjectError;
use crate::domain::shared::RepositoryError;

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Username already exists")]
  UserAlreadyExists,

  #[error("User not found")]
  UserNotFound,

  #[error("Invalid username or password")]
  InvalidCredentials,

  #[error("Authorization header is empty")]
  MissingToken,

  #[error("Invalid token")]
  InvalidToken,

  #[error("Token expired")]
  TokenExpired,

  #[error("Token is on the blacklist")]
  TokenRevoked,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(TokenError),

  #[error("Blacklist error: {0}")]
  Blacklist(#[from] BlacklistError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}

impl From<TokenError> for AuthError {
  fn from(error: TokenError) -> Self {
    match error {
      TokenError::Invalid => AuthError::InvalidToken,
      other => AuthError::Token(other),
    }
  }
}

/// Credential hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to generate salt: {0}")]
  SaltGenerationFailed(String),
}

/// Session token signing and parsing errors
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Invalid token")]
  Invalid,

  #[error("Failed to sign token: {0}")]
  SigningFailed(String),

  #[error("Signing secret must not be empty")]
  MissingSecret,

  #[error("Token lifetime is out of range")]
  InvalidLifetime,
}

/// Revocation store errors
#[derive(Debug, Error)]
pub enum BlacklistError {
  #[error("Blacklist store unavailable: {0}")]
  Unavailable(String),

  #[error("Blacklist command failed: {0}")]
  CommandFailed(String),
}

impl From<redis::RedisError> for BlacklistError {
  fn from(error: redis::RedisError) -> Self {
    if error.is_io_error() || error.is_connection_dropped() || error.is_timeout() {
      BlacklistError::Unavailable(error.to_string())
    } else {
      BlacklistError::CommandFailed(error.to_string())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_token_error_maps_to_invalid_token() {
    let error: AuthError = TokenError::Invalid.into();
    assert!(matches!(error, AuthError::InvalidToken));

    let error: AuthError = TokenError::SigningFailed("boom".to_string()).into();
    assert!(matches!(error, AuthError::Token(_)));
  }
}
