use std::sync::Arc;

use crate::domain::user::{User, UserError, UserService};

/// Lookup key for a single user
#[derive(Debug, Clone)]
pub enum GetUserQuery {
  Id(i64),
  Username(String),
}

/// Use case for loading one user together with its habits
pub struct GetUserUseCase {
  user_service: Arc<UserService>,
}

impl GetUserUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  pub async fn execute(&self, query: GetUserQuery) -> Result<User, UserError> {
    match query {
      GetUserQuery::Id(id) => self.user_service.get_user_by_id(id).await,
      GetUserQuery::Username(username) => self.user_service.get_user_by_username(&username).await,
    }
  }
}
