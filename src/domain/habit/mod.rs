pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Habit, NewHabit};
pub use errors::HabitError;
pub use ports::HabitRepository;
pub use services::HabitService;
