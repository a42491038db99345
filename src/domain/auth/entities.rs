use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried inside a signed session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
  /// Identifier of the authenticated user
  pub uid: i64,
  /// Username at the time the token was issued
  pub username: String,
  /// Unique token identifier, used as the revocation key
  pub jti: String,
  /// Issued-at, seconds since the Unix epoch
  pub iat: i64,
  /// Expires-at, seconds since the Unix epoch
  pub exp: i64,
}

impl SessionClaims {
  /// Checks whether the token has expired relative to `now`
  pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
    self.exp < now.timestamp()
  }

  /// Returns the expiry as a timestamp, if representable
  pub fn expires_at(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.exp, 0)
  }
}

/// A freshly signed token together with its claims
#[derive(Debug, Clone)]
pub struct IssuedToken {
  pub token: String,
  pub claims: SessionClaims,
}

/// Identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
  /// Token identifier (`jti`), the key used for logout
  pub token_id: String,
  pub user_id: i64,
  pub username: String,
}

impl From<SessionClaims> for AuthenticatedSession {
  fn from(claims: SessionClaims) -> Self {
    Self {
      token_id: claims.jti,
      user_id: claims.uid,
      username: claims.username,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  fn claims(exp: i64) -> SessionClaims {
    SessionClaims {
      uid: 1,
      username: "alice".to_string(),
      jti: "jti-1".to_string(),
      iat: exp - 7200,
      exp,
    }
  }

  #[test]
  fn test_is_expired_at() {
    let now = Utc::now();
    assert!(claims((now - Duration::seconds(1)).timestamp()).is_expired_at(now));
    assert!(!claims((now + Duration::hours(2)).timestamp()).is_expired_at(now));
  }

  #[test]
  fn test_session_from_claims_keeps_token_and_user_ids_apart() {
    let session = AuthenticatedSession::from(claims(0));
    assert_eq!(session.token_id, "jti-1");
    assert_eq!(session.user_id, 1);
    assert_eq!(session.username, "alice");
  }
}
