use std::sync::Arc;

use crate::domain::habit::{Habit, HabitError, HabitService};

pub struct GetHabitUseCase {
  habit_service: Arc<HabitService>,
}

impl GetHabitUseCase {
  pub fn new(habit_service: Arc<HabitService>) -> Self {
    Self { habit_service }
  }

  pub async fn execute(&self, id: i64) -> Result<Habit, HabitError> {
    self.habit_service.get_habit_by_id(id).await
  }
}
