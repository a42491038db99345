use std::sync::Arc;

use crate::domain::habit::{Habit, HabitError, HabitService};

/// Command for a partial habit update; empty fields are left unchanged
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
  pub id: i64,
  pub name: Option<String>,
  pub info: Option<String>,
}

pub struct UpdateHabitUseCase {
  habit_service: Arc<HabitService>,
}

impl UpdateHabitUseCase {
  pub fn new(habit_service: Arc<HabitService>) -> Self {
    Self { habit_service }
  }

  pub async fn execute(&self, command: UpdateHabitCommand) -> Result<Habit, HabitError> {
    self
      .habit_service
      .update_habit(command.id, command.name, command.info)
      .await
  }
}
