use std::sync::Arc;

use crate::domain::auth::value_objects::{Password, Username};
use crate::domain::user::{User, UserError, UserService};

/// Command for creating an active user directly
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
  pub username: String,
  pub password: String,
}

pub struct CreateUserUseCase {
  user_service: Arc<UserService>,
}

impl CreateUserUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  pub async fn execute(&self, command: CreateUserCommand) -> Result<User, UserError> {
    let username = Username::new(command.username)?;
    let password = Password::new(command.password)?;

    self.user_service.create_user(username, password).await
  }
}
