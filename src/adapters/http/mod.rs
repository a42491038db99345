pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

// Re-export commonly used types
pub use errors::ApiError;
pub use middleware::{AuthMiddleware, AuthSession, RequestId, RequestIdExt, RequestIdMiddleware};
pub use response::ApiResponse;
pub use routes::{
  ApiDependencies, AuthRouteDependencies, HabitRouteDependencies, UserRouteDependencies,
  configure_api,
};
