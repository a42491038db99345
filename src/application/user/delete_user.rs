use std::sync::Arc;

use crate::domain::user::{UserError, UserService};

/// Use case for deleting a user and all of its habits
pub struct DeleteUserUseCase {
  user_service: Arc<UserService>,
}

impl DeleteUserUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  pub async fn execute(&self, id: i64) -> Result<(), UserError> {
    self.user_service.delete_user(id).await
  }
}
