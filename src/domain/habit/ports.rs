use crate::domain::shared::Repository;

use super::entities::Habit;

/// Repository trait for habit persistence operations
pub trait HabitRepository: Repository<Habit> {}
