use std::sync::Arc;

use crate::domain::habit::{Habit, HabitError, HabitService};
use crate::domain::shared::Pagination;

/// Raw paging parameters, clamped before use
#[derive(Debug, Clone, Default)]
pub struct ListHabitsQuery {
  pub page: Option<i64>,
  pub page_size: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ListHabitsResponse {
  pub habits: Vec<Habit>,
  /// Number of habits across all pages
  pub total: i64,
  pub pagination: Pagination,
}

/// Use case for paging through all habits regardless of owner
pub struct ListHabitsUseCase {
  habit_service: Arc<HabitService>,
}

impl ListHabitsUseCase {
  pub fn new(habit_service: Arc<HabitService>) -> Self {
    Self { habit_service }
  }

  pub async fn execute(&self, query: ListHabitsQuery) -> Result<ListHabitsResponse, HabitError> {
    let pagination = Pagination::new(
      query.page.unwrap_or(Pagination::DEFAULT_PAGE),
      query.page_size.unwrap_or(Pagination::DEFAULT_PAGE_SIZE),
    );

    let habits = self.habit_service.list_habits(pagination).await?;
    let total = self.habit_service.count_habits().await?;

    Ok(ListHabitsResponse {
      habits,
      total,
      pagination,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::TestContext;

  #[tokio::test]
  async fn test_oversized_page_is_clamped() {
    let ctx = TestContext::new();
    let use_case = ListHabitsUseCase::new(Arc::new(ctx.habit_service()));

    let response = use_case
      .execute(ListHabitsQuery {
        page: Some(-3),
        page_size: Some(1000),
      })
      .await
      .unwrap();

    assert_eq!(response.pagination, Pagination::new(1, 100));
    assert_eq!(ctx.store.last_page(), Some((0, 100)));
    assert!(response.habits.is_empty());
    assert_eq!(response.total, 0);
  }
}
