//! User management use cases

mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::{GetUserQuery, GetUserUseCase};
pub use list_users::{ListUsersQuery, ListUsersResponse, ListUsersUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};
