use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::habit::Habit;
use crate::domain::user::User;

// ============================================================================
// Auth
// ============================================================================

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
  pub username: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
  pub username: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

// ============================================================================
// Users
// ============================================================================

/// Request for creating a user directly
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
  #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
  pub username: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Partial profile update; an absent or empty username is ignored
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
  #[validate(length(max = 32, message = "Username must be between 3 and 32 characters"))]
  #[serde(default)]
  pub username: Option<String>,
}

/// User as returned to clients, without credentials
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
  pub id: i64,
  pub username: String,
  pub status: i16,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub habits: Vec<HabitResponse>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      username: user.username,
      status: user.status.as_i16(),
      created_at: user.created_at,
      updated_at: user.updated_at,
      habits: user.habits.into_iter().map(HabitResponse::from).collect(),
    }
  }
}

// ============================================================================
// Habits
// ============================================================================

/// Request for creating a habit
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHabitRequest {
  #[validate(range(min = 1, message = "user_id is required"))]
  pub user_id: i64,

  #[validate(length(min = 1, max = 64, message = "Name must be between 1 and 64 characters"))]
  pub name: String,

  #[validate(length(min = 1, max = 255, message = "Info must be between 1 and 255 characters"))]
  pub info: String,
}

/// Partial habit update; absent or empty fields keep their values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHabitRequest {
  #[validate(length(max = 64, message = "Name must be between 1 and 64 characters"))]
  #[serde(default)]
  pub name: Option<String>,

  #[validate(length(max = 255, message = "Info must be between 1 and 255 characters"))]
  #[serde(default)]
  pub info: Option<String>,
}

/// Request for deleting a habit through its owner
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteHabitRequest {
  #[validate(range(min = 1, message = "user_id is required"))]
  pub user_id: i64,

  #[validate(range(min = 1, message = "habit_id is required"))]
  pub habit_id: i64,
}

/// Habit as returned to clients; the owner id stays internal
#[derive(Debug, Clone, Serialize)]
pub struct HabitResponse {
  pub id: i64,
  pub name: String,
  pub info: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<Habit> for HabitResponse {
  fn from(habit: Habit) -> Self {
    Self {
      id: habit.id,
      name: habit.name,
      info: habit.info,
      created_at: habit.created_at,
      updated_at: habit.updated_at,
    }
  }
}

// ============================================================================
// Paging
// ============================================================================

/// Paging query string of `GET /user`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPageQuery {
  pub page: Option<i64>,
  pub page_size: Option<i64>,
}

/// Paging query string of `GET /habit`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitPageQuery {
  pub page: Option<i64>,
  #[serde(rename = "pageSize")]
  pub page_size: Option<i64>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::user::UserStatus;

  #[test]
  fn test_register_request_validation() {
    let request = RegisterRequest {
      username: "al".to_string(),
      password: "secret".to_string(),
    };
    assert!(request.validate().is_err());

    let request = RegisterRequest {
      username: "alice".to_string(),
      password: String::new(),
    };
    assert!(request.validate().is_err());

    let request = RegisterRequest {
      username: "alice".to_string(),
      password: "secret".to_string(),
    };
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_user_page_query_reads_snake_case_size() {
    let query: UserPageQuery = serde_json::from_str(r#"{"page": 2, "page_size": 7}"#).unwrap();
    assert_eq!(query.page, Some(2));
    assert_eq!(query.page_size, Some(7));

    let query: UserPageQuery = serde_json::from_str(r#"{"pageSize": 5}"#).unwrap();
    assert_eq!(query.page_size, None);
  }

  #[test]
  fn test_habit_page_query_reads_camel_case_size() {
    let query: HabitPageQuery = serde_json::from_str(r#"{"page": 2, "pageSize": 5}"#).unwrap();
    assert_eq!(query.page, Some(2));
    assert_eq!(query.page_size, Some(5));

    let query: HabitPageQuery = serde_json::from_str(r#"{"page_size": 7}"#).unwrap();
    assert_eq!(query.page_size, None);
  }

  #[test]
  fn test_user_response_hides_credentials_and_habit_owner() {
    let now = Utc::now();
    let user = User {
      id: 1,
      username: "alice".to_string(),
      password_hash: "hash".to_string(),
      salt: "salt".to_string(),
      status: UserStatus::Inactive,
      created_at: now,
      updated_at: now,
      deleted_at: None,
      habits: vec![Habit {
        id: 9,
        name: "Run".to_string(),
        info: "5k daily".to_string(),
        user_id: 1,
        created_at: now,
        updated_at: now,
      }],
    };

    let value = serde_json::to_value(UserResponse::from(user)).unwrap();

    assert!(value.get("password_hash").is_none());
    assert!(value.get("salt").is_none());
    assert_eq!(value["status"], 0);
    assert_eq!(value["habits"][0]["name"], "Run");
    assert!(value["habits"][0].get("user_id").is_none());
  }
}
