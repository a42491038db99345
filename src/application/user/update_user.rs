use std::sync::Arc;

use crate::domain::auth::value_objects::Username;
use crate::domain::user::{User, UserError, UserService};

/// Command for a partial profile update
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
  pub id: i64,
  /// Absent or empty means "keep the current username"
  pub username: Option<String>,
}

pub struct UpdateUserUseCase {
  user_service: Arc<UserService>,
}

impl UpdateUserUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  pub async fn execute(&self, command: UpdateUserCommand) -> Result<User, UserError> {
    let username = command
      .username
      .filter(|u| !u.is_empty())
      .map(Username::new)
      .transpose()?;

    self.user_service.update_user(command.id, username).await
  }
}
