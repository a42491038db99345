use std::sync::Arc;

use crate::domain::habit::{Habit, HabitError, HabitService};

/// Command for creating a habit for an existing user
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
  pub user_id: i64,
  pub name: String,
  pub info: String,
}

pub struct CreateHabitUseCase {
  habit_service: Arc<HabitService>,
}

impl CreateHabitUseCase {
  pub fn new(habit_service: Arc<HabitService>) -> Self {
    Self { habit_service }
  }

  pub async fn execute(&self, command: CreateHabitCommand) -> Result<Habit, HabitError> {
    self
      .habit_service
      .create_habit(command.user_id, command.name, command.info)
      .await
  }
}
