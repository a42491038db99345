use std::sync::Arc;

use crate::domain::auth::entities::AuthenticatedSession;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for resolving a bearer token to a session
pub struct AuthenticateTokenUseCase {
  auth_service: Arc<AuthService>,
}

impl AuthenticateTokenUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Validates the raw token taken from the `Authorization` header
  ///
  /// # Errors
  /// Returns `AuthError::MissingToken` for an empty token, otherwise whatever
  /// `AuthService::authenticate` reports
  pub async fn execute(&self, token: &str) -> Result<AuthenticatedSession, AuthError> {
    let token = token.trim();
    if token.is_empty() {
      return Err(AuthError::MissingToken);
    }

    self.auth_service.authenticate(token).await
  }
}
