mod table;

pub mod habit_repository;
pub mod health_repository;
pub mod user_repository;

pub use habit_repository::PostgresHabitRepository;
pub use health_repository::PostgresHealthRepository;
pub use table::{PgTable, TableRow};
pub use user_repository::PostgresUserRepository;
