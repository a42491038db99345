use chrono::{DateTime, Utc};

use super::errors::HabitError;
use crate::domain::shared::Entity;

const NAME_MAX_LENGTH: usize = 64;
const INFO_MAX_LENGTH: usize = 255;

/// Habit entity owned by exactly one user
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
  /// Store-assigned identifier
  pub id: i64,
  /// Short habit name
  pub name: String,
  /// Free-text description
  pub info: String,
  /// Owning user, fixed at creation
  pub user_id: i64,
  /// Timestamp when the habit was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the habit was last updated
  pub updated_at: DateTime<Utc>,
}

impl Habit {
  /// Applies a partial update; `None` and empty values leave the field untouched
  pub fn apply_changes(
    &mut self,
    name: Option<String>,
    info: Option<String>,
  ) -> Result<(), HabitError> {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
      self.name = validate_name(name)?;
    }

    if let Some(info) = info.filter(|i| !i.is_empty()) {
      self.info = validate_info(info)?;
    }

    self.updated_at = Utc::now();
    Ok(())
  }
}

impl Entity for Habit {
  type Draft = NewHabit;

  fn id(&self) -> i64 {
    self.id
  }
}

/// A habit that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewHabit {
  pub user_id: i64,
  pub name: String,
  pub info: String,
}

impl NewHabit {
  /// Creates a validated habit draft for the given owner
  pub fn new(user_id: i64, name: String, info: String) -> Result<Self, HabitError> {
    Ok(Self {
      user_id,
      name: validate_name(name)?,
      info: validate_info(info)?,
    })
  }
}

fn validate_name(name: String) -> Result<String, HabitError> {
  let length = name.chars().count();
  if length == 0 || length > NAME_MAX_LENGTH {
    return Err(HabitError::InvalidName {
      max: NAME_MAX_LENGTH,
    });
  }
  Ok(name)
}

fn validate_info(info: String) -> Result<String, HabitError> {
  let length = info.chars().count();
  if length == 0 || length > INFO_MAX_LENGTH {
    return Err(HabitError::InvalidInfo {
      max: INFO_MAX_LENGTH,
    });
  }
  Ok(info)
}
