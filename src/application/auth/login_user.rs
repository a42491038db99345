use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Password, Username};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub username: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub user_id: i64,
  /// Signed session token
  pub token: String,
  /// Token identifier used for revocation
  pub token_id: String,
  pub expires_at: Option<DateTime<Utc>>,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  /// Creates a new instance of LoginUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user login use case
  ///
  /// # Errors
  /// Returns `AuthError` if login fails (unknown user or wrong password)
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AuthError> {
    let username = Username::new(command.username)?;
    let password = Password::new(command.password)?;

    let issued = self.auth_service.login(username, password).await?;

    Ok(LoginUserResponse {
      user_id: issued.claims.uid,
      expires_at: issued.claims.expires_at(),
      token_id: issued.claims.jti,
      token: issued.token,
    })
  }
}
