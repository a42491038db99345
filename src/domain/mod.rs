pub mod auth;
pub mod habit;
pub mod health;
pub mod shared;
pub mod user;
