pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{AuthenticatedSession, IssuedToken, SessionClaims};
pub use errors::{AuthError, BlacklistError, HashError, TokenError};
pub use ports::{PasswordHasher, TokenBlacklist, TokenService};
pub use services::AuthService;
pub use value_objects::{Password, Username, ValueObjectError};
