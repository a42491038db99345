use std::sync::Arc;

use crate::domain::habit::{HabitError, HabitService};

/// Command naming the owner and the habit to remove
#[derive(Debug, Clone, Copy)]
pub struct DeleteHabitCommand {
  pub user_id: i64,
  pub habit_id: i64,
}

/// Use case for deleting a habit through its owner
pub struct DeleteHabitUseCase {
  habit_service: Arc<HabitService>,
}

impl DeleteHabitUseCase {
  pub fn new(habit_service: Arc<HabitService>) -> Self {
    Self { habit_service }
  }

  pub async fn execute(&self, command: DeleteHabitCommand) -> Result<(), HabitError> {
    self
      .habit_service
      .delete_habit(command.user_id, command.habit_id)
      .await
  }
}
