//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows. Each use case turns a primitive command
//! into validated value objects and calls one domain service.

pub mod auth;
pub mod habit;
pub mod health;
pub mod user;
