use std::sync::Arc;

use crate::domain::shared::Pagination;
use crate::domain::user::{User, UserError, UserService};

/// Raw paging parameters, clamped before use
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
  pub page: Option<i64>,
  pub page_size: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ListUsersResponse {
  pub users: Vec<User>,
  /// Number of users across all pages
  pub total: i64,
  pub pagination: Pagination,
}

pub struct ListUsersUseCase {
  user_service: Arc<UserService>,
}

impl ListUsersUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  pub async fn execute(&self, query: ListUsersQuery) -> Result<ListUsersResponse, UserError> {
    let pagination = Pagination::new(
      query.page.unwrap_or(Pagination::DEFAULT_PAGE),
      query.page_size.unwrap_or(Pagination::DEFAULT_PAGE_SIZE),
    );

    let users = self.user_service.list_users(pagination).await?;
    let total = self.user_service.count_users().await?;

    Ok(ListUsersResponse {
      users,
      total,
      pagination,
    })
  }
}
