use std::sync::Arc;

use super::entities::{AuthenticatedSession, IssuedToken};
use super::errors::AuthError;
use super::ports::{PasswordHasher, TokenBlacklist, TokenService};
use super::value_objects::{Password, Username};
use crate::domain::shared::RepositoryError;
use crate::domain::user::{NewUser, User, UserRepository, UserStatus};

/// Number of random bytes used for each credential salt
pub const SALT_LENGTH: usize = 16;

/// Authentication service implementing core business logic
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_service: Arc<dyn TokenService>,
  blacklist: Arc<dyn TokenBlacklist>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
    blacklist: Arc<dyn TokenBlacklist>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      token_service,
      blacklist,
    }
  }

  /// Registers a new user with username and password
  ///
  /// The account starts out inactive.
  ///
  /// # Errors
  /// Returns `AuthError::UserAlreadyExists` if the username is taken
  pub async fn register(&self, username: Username, password: Password) -> Result<User, AuthError> {
    match self.user_repo.get_by_username(username.as_str()).await {
      Ok(_) => return Err(AuthError::UserAlreadyExists),
      Err(RepositoryError::NotFound) => {}
      Err(e) => return Err(e.into()),
    }

    let salt = self.password_hasher.generate_salt(SALT_LENGTH)?;
    let password_hash = self.password_hasher.hash(&password, &salt);

    let draft = NewUser {
      username: username.into_inner(),
      password_hash,
      salt,
      status: UserStatus::Inactive,
    };

    let created_user = match self.user_repo.create(draft).await {
      Ok(user) => user,
      Err(RepositoryError::DuplicateKey(_)) => return Err(AuthError::UserAlreadyExists),
      Err(e) => return Err(e.into()),
    };

    tracing::info!(
      user_id = created_user.id,
      username = %created_user.username,
      "User registered"
    );

    Ok(created_user)
  }

  /// Checks credentials and issues a new session token
  ///
  /// # Errors
  /// Returns `AuthError::UserNotFound` for an unknown username and
  /// `AuthError::InvalidCredentials` when the password does not match
  pub async fn login(
    &self,
    username: Username,
    password: Password,
  ) -> Result<IssuedToken, AuthError> {
    let user = match self.user_repo.get_by_username(username.as_str()).await {
      Ok(user) => user,
      Err(RepositoryError::NotFound) => return Err(AuthError::UserNotFound),
      Err(e) => return Err(e.into()),
    };

    if !self
      .password_hasher
      .verify(&password, &user.salt, &user.password_hash)
    {
      tracing::warn!(username = %user.username, "Login rejected: password mismatch");
      return Err(AuthError::InvalidCredentials);
    }

    let issued = self.token_service.issue(user.id, &user.username)?;

    tracing::info!(
      user_id = user.id,
      token_id = %issued.claims.jti,
      "User logged in"
    );

    Ok(issued)
  }

  /// Revokes a token by its identifier
  pub async fn logout(&self, token_id: &str) -> Result<(), AuthError> {
    self.blacklist.revoke(token_id).await?;
    tracing::info!(token_id = %token_id, "Token revoked");
    Ok(())
  }

  /// Validates a bearer token and returns the session it carries
  ///
  /// # Errors
  /// Returns `AuthError::InvalidToken`, `AuthError::TokenExpired` or
  /// `AuthError::TokenRevoked`; a failing revocation store surfaces as
  /// `AuthError::Blacklist`
  pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, AuthError> {
    let claims = self.token_service.parse(token)?;

    if self.token_service.is_expired(&claims) {
      return Err(AuthError::TokenExpired);
    }

    if self.blacklist.is_revoked(&claims.jti).await? {
      return Err(AuthError::TokenRevoked);
    }

    Ok(AuthenticatedSession::from(claims))
  }
}
