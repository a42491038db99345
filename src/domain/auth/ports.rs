use async_trait::async_trait;
use chrono::Utc;

use super::entities::{IssuedToken, SessionClaims};
use super::errors::{BlacklistError, HashError, TokenError};
use super::value_objects::Password;

/// Salted credential hashing
pub trait PasswordHasher: Send + Sync {
  /// Generates `length` random bytes and returns them hex-encoded
  fn generate_salt(&self, length: usize) -> Result<String, HashError>;

  /// Hashes a password with the given salt
  fn hash(&self, password: &Password, salt: &str) -> String;

  /// Verifies a password against a stored hash and salt
  fn verify(&self, password: &Password, salt: &str, expected_hash: &str) -> bool;
}

/// Signed session token issuing and parsing
pub trait TokenService: Send + Sync {
  /// Issues a new signed token for the user
  fn issue(&self, user_id: i64, username: &str) -> Result<IssuedToken, TokenError>;

  /// Verifies the signature and decodes the claims, without checking expiry
  fn parse(&self, token: &str) -> Result<SessionClaims, TokenError>;

  fn is_expired(&self, claims: &SessionClaims) -> bool {
    claims.is_expired_at(Utc::now())
  }
}

/// Revocation store for logged-out token identifiers
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
  /// Marks the token identifier as revoked
  async fn revoke(&self, token_id: &str) -> Result<(), BlacklistError>;

  /// Checks whether the token identifier has been revoked
  async fn is_revoked(&self, token_id: &str) -> Result<bool, BlacklistError>;
}
