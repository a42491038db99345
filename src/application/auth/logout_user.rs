use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for logging out the current token
pub struct LogoutUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LogoutUserUseCase {
  /// Creates a new instance of LogoutUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Revokes the token with the given identifier
  pub async fn execute(&self, token_id: &str) -> Result<(), AuthError> {
    self.auth_service.logout(token_id).await
  }
}
