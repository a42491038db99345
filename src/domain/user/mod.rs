pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{NewUser, User, UserStatus};
pub use errors::UserError;
pub use ports::UserRepository;
pub use services::UserService;
