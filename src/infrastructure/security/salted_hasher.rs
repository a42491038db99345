use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::domain::auth::errors::HashError;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::Password;

/// Salted SHA-256 credential hasher
///
/// The stored hash is the lowercase hex SHA-256 digest of the password bytes
/// followed by the hex salt string.
#[derive(Debug, Default, Clone, Copy)]
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
  pub fn new() -> Self {
    Self
  }

  fn digest(secret: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
  }
}

impl PasswordHasher for SaltedSha256Hasher {
  fn generate_salt(&self, length: usize) -> Result<String, HashError> {
    let mut bytes = vec![0u8; length];
    OsRng
      .try_fill_bytes(&mut bytes)
      .map_err(|e| HashError::SaltGenerationFailed(e.to_string()))?;
    Ok(hex::encode(bytes))
  }

  fn hash(&self, password: &Password, salt: &str) -> String {
    Self::digest(password.as_str(), salt)
  }

  fn verify(&self, password: &Password, salt: &str, expected_hash: &str) -> bool {
    Self::digest(password.as_str(), salt) == expected_hash
  }
}
