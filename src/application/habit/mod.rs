//! Habit management use cases

mod create_habit;
mod delete_habit;
mod get_habit;
mod list_habits;
mod update_habit;

pub use create_habit::{CreateHabitCommand, CreateHabitUseCase};
pub use delete_habit::{DeleteHabitCommand, DeleteHabitUseCase};
pub use get_habit::GetHabitUseCase;
pub use list_habits::{ListHabitsQuery, ListHabitsResponse, ListHabitsUseCase};
pub use update_habit::{UpdateHabitCommand, UpdateHabitUseCase};
