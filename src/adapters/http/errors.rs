use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;
use crate::domain::habit::HabitError;
use crate::domain::shared::RepositoryError;
use crate::domain::user::UserError;

use super::response::ApiResponse;

/// API error type rendered as the `{code: -1, msg: "error", data}` envelope
///
/// Every variant is sent with HTTP 200; clients tell failures apart by `code`
/// and the message in `data`.
#[derive(Debug)]
pub enum ApiError {
  /// Malformed or missing input
  Validation(String),

  NotFound(String),

  /// Duplicate username
  Conflict(String),

  /// Missing, invalid, expired or revoked token, or bad credentials
  Unauthorized(String),

  /// A backing store could not be reached
  Unavailable(String),

  /// Anything else; details are logged, not returned
  Internal(String),
}

impl ApiError {
  /// Message placed in the envelope's `data` field
  pub fn public_message(&self) -> &str {
    match self {
      ApiError::Validation(msg)
      | ApiError::NotFound(msg)
      | ApiError::Conflict(msg)
      | ApiError::Unauthorized(msg)
      | ApiError::Unavailable(msg) => msg,
      ApiError::Internal(_) => "Internal server error",
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
      ApiError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    StatusCode::OK
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      ApiError::Internal(msg) => tracing::error!("Internal error: {}", msg),
      ApiError::Unavailable(msg) => tracing::error!("Dependency unavailable: {}", msg),
      ApiError::Unauthorized(msg) => tracing::warn!("Request rejected: {}", msg),
      _ => tracing::debug!("Request failed: {}", self),
    }

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ApiResponse::error(self.public_message()))
  }
}

fn from_repository(error: RepositoryError) -> ApiError {
  match error {
    RepositoryError::NotFound => ApiError::NotFound(error.to_string()),
    RepositoryError::DuplicateKey(_) => ApiError::Conflict("Username already exists".to_string()),
    RepositoryError::ConnectionFailed(_) => ApiError::Unavailable("Database unavailable".to_string()),
    other => ApiError::Internal(other.to_string()),
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::UserAlreadyExists => ApiError::Conflict(error.to_string()),
      AuthError::UserNotFound => ApiError::NotFound(error.to_string()),
      AuthError::InvalidCredentials
      | AuthError::MissingToken
      | AuthError::InvalidToken
      | AuthError::TokenExpired
      | AuthError::TokenRevoked => ApiError::Unauthorized(error.to_string()),
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Repository(err) => from_repository(err),
      AuthError::Blacklist(err) => {
        tracing::error!("Token blacklist error: {}", err);
        ApiError::Unavailable("Token blacklist unavailable".to_string())
      }
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
      AuthError::Token(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert UserError to ApiError
impl From<UserError> for ApiError {
  fn from(error: UserError) -> Self {
    match error {
      UserError::NotFound => ApiError::NotFound(error.to_string()),
      UserError::AlreadyExists => ApiError::Conflict(error.to_string()),
      UserError::ValueObject(err) => ApiError::Validation(err.to_string()),
      UserError::Repository(err) => from_repository(err),
      UserError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert HabitError to ApiError
impl From<HabitError> for ApiError {
  fn from(error: HabitError) -> Self {
    match error {
      HabitError::NotFound | HabitError::UserNotFound => ApiError::NotFound(error.to_string()),
      HabitError::InvalidName { .. } | HabitError::InvalidInfo { .. } => {
        ApiError::Validation(error.to_string())
      }
      HabitError::Repository(err) => from_repository(err),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
