//! Authentication use cases
//!
//! Registration, login, logout and bearer-token authentication.

mod authenticate_token;
mod login_user;
mod logout_user;
mod register_user;

pub use authenticate_token::AuthenticateTokenUseCase;
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use logout_user::LogoutUserUseCase;
pub use register_user::{RegisterUserCommand, RegisterUserResponse, RegisterUserUseCase};
