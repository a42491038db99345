use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Username must be between {min} and {max} characters")]
  InvalidUsername { min: usize, max: usize },

  #[error("Password is required")]
  PasswordEmpty,

  #[error("Password is too long (maximum {max} characters)")]
  PasswordTooLong { max: usize },
}

// ============================================================================
// Username Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
  pub const MIN_LENGTH: usize = 3;
  pub const MAX_LENGTH: usize = 32;

  /// Creates a new Username after length validation
  pub fn new(username: impl Into<String>) -> Result<Self, ValueObjectError> {
    let username = username.into();
    let length = username.chars().count();

    if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
      return Err(ValueObjectError::InvalidUsername {
        min: Self::MIN_LENGTH,
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(username))
  }

  /// Returns the username as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Username {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Username {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  const MAX_LENGTH: usize = 128;

  /// Creates a new Password after validation
  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValueObjectError::PasswordEmpty);
    }

    if password.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}
