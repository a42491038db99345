use chrono::{DateTime, Utc};

use crate::domain::habit::Habit;
use crate::domain::shared::Entity;

/// Account status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i16)]
pub enum UserStatus {
  /// Registered but not yet activated
  Inactive = 0,
  #[default]
  Active = 1,
}

impl UserStatus {
  pub fn as_i16(self) -> i16 {
    self as i16
  }

  /// Unknown values fall back to active, the column default
  pub fn from_i16(value: i16) -> Self {
    match value {
      0 => UserStatus::Inactive,
      _ => UserStatus::Active,
    }
  }
}

/// User entity representing an account and its habits
#[derive(Debug, Clone, PartialEq)]
pub struct User {
  /// Store-assigned identifier
  pub id: i64,
  /// Unique username among non-deleted users
  pub username: String,
  /// Hex-encoded salted hash of the password
  pub password_hash: String,
  /// Hex-encoded salt
  pub salt: String,
  pub status: UserStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// Soft-delete marker
  pub deleted_at: Option<DateTime<Utc>>,
  /// Owned habits in insertion order; only filled by the single-user lookups
  pub habits: Vec<Habit>,
}

impl User {
  /// Renames the user
  pub fn rename(&mut self, username: String) {
    self.username = username;
    self.updated_at = Utc::now();
  }

  /// Adds a habit to the in-memory collection
  pub fn attach_habit(&mut self, habit: Habit) {
    self.habits.push(habit);
  }

  /// Removes a habit from the in-memory collection by linear scan
  pub fn detach_habit(&mut self, habit_id: i64) -> Option<Habit> {
    let position = self.habits.iter().position(|h| h.id == habit_id)?;
    Some(self.habits.remove(position))
  }
}

impl Entity for User {
  type Draft = NewUser;

  fn id(&self) -> i64 {
    self.id
  }
}

/// A user that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
  pub username: String,
  pub password_hash: String,
  pub salt: String,
  pub status: UserStatus,
}
