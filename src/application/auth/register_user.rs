use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Password, Username};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub username: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  pub user_id: i64,
  pub username: String,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the registration use case
  ///
  /// # Errors
  /// Returns `AuthError::ValueObject` for a malformed username or password and
  /// `AuthError::UserAlreadyExists` when the username is taken
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AuthError> {
    let username = Username::new(command.username)?;
    let password = Password::new(command.password)?;

    let user = self.auth_service.register(username, password).await?;

    Ok(RegisterUserResponse {
      user_id: user.id,
      username: user.username,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::TestContext;

  #[tokio::test]
  async fn test_short_username_is_rejected_before_storage() {
    let ctx = TestContext::new();
    let use_case = RegisterUserUseCase::new(Arc::new(ctx.auth_service()));

    let result = use_case
      .execute(RegisterUserCommand {
        username: "al".to_string(),
        password: "secret".to_string(),
      })
      .await;

    assert!(matches!(result, Err(AuthError::ValueObject(_))));
  }
}
