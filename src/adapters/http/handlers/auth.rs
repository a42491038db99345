use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, RegisterRequest},
  errors::ApiError,
  middleware::AuthSession,
  response::ok,
};
use crate::application::auth::{
  LoginUserCommand, LoginUserUseCase, LogoutUserUseCase, RegisterUserCommand, RegisterUserUseCase,
};

/// Handler for user registration
///
/// POST /auth/register
/// Body: RegisterRequest (JSON)
/// Response: "Register successfully"
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let response = use_case
    .execute(RegisterUserCommand {
      username: request.username,
      password: request.password,
    })
    .await?;

  tracing::debug!(
    user_id = response.user_id,
    username = %response.username,
    "Registration completed"
  );
  Ok(ok("Register successfully"))
}

/// Handler for user login
///
/// POST /auth/login
/// Body: LoginRequest (JSON)
/// Response: the signed token string
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let response = use_case
    .execute(LoginUserCommand {
      username: request.username,
      password: request.password,
    })
    .await?;

  tracing::debug!(
    user_id = response.user_id,
    token_id = %response.token_id,
    expires_at = ?response.expires_at,
    "Login completed"
  );
  Ok(ok(response.token))
}

/// Handler for logout
///
/// POST /auth/logout
/// Headers: Authorization: Bearer <token>
/// Response: "Logout successfully"
pub async fn logout_handler(
  use_case: web::Data<Arc<LogoutUserUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let session = http_req.auth_session()?;
  use_case.execute(&session.token_id).await?;

  Ok(ok("Logout successfully"))
}
