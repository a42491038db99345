use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::domain::auth::entities::{IssuedToken, SessionClaims};
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::ports::TokenService;

/// HMAC-signed JWT session tokens
///
/// The secret is fixed at construction; tokens are signed with HS256 and any
/// member of the HMAC family is accepted when parsing.
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  ttl: Duration,
}

impl JwtTokenService {
  /// Creates a token service with the given signing secret and lifetime
  ///
  /// # Errors
  /// Returns `TokenError::MissingSecret` for an empty secret and
  /// `TokenError::InvalidLifetime` for a lifetime chrono cannot represent
  pub fn new(secret: &str, ttl_seconds: u64) -> Result<Self, TokenError> {
    if secret.is_empty() {
      return Err(TokenError::MissingSecret);
    }

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      ttl: i64::try_from(ttl_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or(TokenError::InvalidLifetime)?,
    })
  }

  /// Issues a token as if it had been signed at `issued_at`
  pub fn issue_at(
    &self,
    user_id: i64,
    username: &str,
    issued_at: DateTime<Utc>,
  ) -> Result<IssuedToken, TokenError> {
    let expires_at = issued_at
      .checked_add_signed(self.ttl)
      .ok_or(TokenError::InvalidLifetime)?;

    let claims = SessionClaims {
      uid: user_id,
      username: username.to_string(),
      jti: Uuid::new_v4().to_string(),
      iat: issued_at.timestamp(),
      exp: expires_at.timestamp(),
    };

    let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

    Ok(IssuedToken { token, claims })
  }

  fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    // Expiry is reported separately through `is_expired`
    validation.validate_exp = false;
    validation.leeway = 0;
    validation
  }
}

impl TokenService for JwtTokenService {
  fn issue(&self, user_id: i64, username: &str) -> Result<IssuedToken, TokenError> {
    self.issue_at(user_id, username, Utc::now())
  }

  fn parse(&self, token: &str) -> Result<SessionClaims, TokenError> {
    decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
      .map(|data| data.claims)
      .map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        TokenError::Invalid
      })
  }
}
