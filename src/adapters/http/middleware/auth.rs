use actix_web::{
  Error, HttpMessage, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::AUTHORIZATION,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::ApiError, application::auth::AuthenticateTokenUseCase,
  domain::auth::entities::AuthenticatedSession, domain::auth::errors::AuthError,
};

/// Bearer-token middleware guarding the protected routes
///
/// This middleware:
/// 1. Reads `Authorization: Bearer <token>`
/// 2. Validates signature, expiry and revocation through `AuthenticateTokenUseCase`
/// 3. Attaches the `AuthenticatedSession` to request extensions
/// 4. Otherwise answers with the error envelope and never calls the handler
pub struct AuthMiddleware {
  authenticate_use_case: Arc<AuthenticateTokenUseCase>,
}

impl AuthMiddleware {
  pub fn new(authenticate_use_case: Arc<AuthenticateTokenUseCase>) -> Self {
    Self {
      authenticate_use_case,
    }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      authenticate_use_case: self.authenticate_use_case.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  authenticate_use_case: Arc<AuthenticateTokenUseCase>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let authenticate_use_case = self.authenticate_use_case.clone();

    Box::pin(async move {
      let result = match extract_bearer_token(&req) {
        Ok(token) => authenticate_use_case.execute(&token).await,
        Err(e) => Err(e),
      };

      let session = match result {
        Ok(session) => session,
        Err(e) => {
          tracing::warn!(path = %req.path(), error = %e, "Authentication failed");
          let (request, _) = req.into_parts();
          let response = ApiError::from(e).error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      tracing::debug!(user_id = session.user_id, token_id = %session.token_id, "Authenticated");
      req.extensions_mut().insert(session);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, AuthError> {
  let header = req
    .headers()
    .get(AUTHORIZATION)
    .and_then(|h| h.to_str().ok())
    .map(str::trim)
    .filter(|h| !h.is_empty())
    .ok_or(AuthError::MissingToken)?;

  header
    .strip_prefix("Bearer ")
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .ok_or(AuthError::InvalidToken)
}

/// Extension trait to read the authenticated session in handlers
pub trait AuthSession {
  /// Returns the session attached by `AuthMiddleware`
  ///
  /// # Errors
  /// Returns `ApiError::Unauthorized` when the route is not behind the middleware
  fn auth_session(&self) -> Result<AuthenticatedSession, ApiError>;
}

impl AuthSession for actix_web::HttpRequest {
  fn auth_session(&self) -> Result<AuthenticatedSession, ApiError> {
    self
      .extensions()
      .get::<AuthenticatedSession>()
      .cloned()
      .ok_or_else(|| ApiError::Unauthorized(AuthError::MissingToken.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::ports::{TokenBlacklist, TokenService};
  use crate::test_support::TestContext;
  use actix_web::test::TestRequest;
  use actix_web::{App, HttpRequest, HttpResponse, web};
  use chrono::Utc;
  use serde_json::Value;

  #[test]
  fn test_extract_bearer_token_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_srv_request();

    assert_eq!(extract_bearer_token(&req).unwrap(), "test_token_123");
  }

  #[test]
  fn test_extract_bearer_token_missing() {
    let req = TestRequest::default().to_srv_request();
    assert!(matches!(
      extract_bearer_token(&req),
      Err(AuthError::MissingToken)
    ));
  }

  #[test]
  fn test_extract_bearer_token_invalid_format() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
      .to_srv_request();

    assert!(matches!(
      extract_bearer_token(&req),
      Err(AuthError::InvalidToken)
    ));
  }

  async fn whoami(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = req.auth_session()?;
    Ok(HttpResponse::Ok().body(session.username))
  }

  async fn call_protected(ctx: &TestContext, authorization: Option<String>) -> (String, Value) {
    let middleware = AuthMiddleware::new(Arc::new(AuthenticateTokenUseCase::new(Arc::new(
      ctx.auth_service(),
    ))));
    let app = actix_web::test::init_service(
      App::new().service(
        web::resource("/me")
          .wrap(middleware)
          .route(web::get().to(whoami)),
      ),
    )
    .await;

    let mut req = TestRequest::get().uri("/me");
    if let Some(value) = authorization {
      req = req.insert_header(("Authorization", value));
    }
    let resp = actix_web::test::call_service(&app, req.to_request()).await;
    assert!(resp.status().is_success());

    let bytes = actix_web::test::read_body(resp).await;
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let json = serde_json::from_str(&text).unwrap_or(Value::Null);
    (text, json)
  }

  #[actix_web::test]
  async fn test_valid_token_reaches_handler() {
    let ctx = TestContext::new();
    let issued = ctx.token_service.issue(1, "alice").unwrap();

    let (text, _) = call_protected(&ctx, Some(format!("Bearer {}", issued.token))).await;
    assert_eq!(text, "alice");
  }

  #[actix_web::test]
  async fn test_rejections_use_distinct_messages() {
    let ctx = TestContext::new();

    let (_, body) = call_protected(&ctx, None).await;
    assert_eq!(body["code"], -1);
    assert_eq!(body["data"], "Authorization header is empty");

    let (_, body) = call_protected(&ctx, Some("Bearer nonsense".to_string())).await;
    assert_eq!(body["data"], "Invalid token");

    let expired = ctx.expired_token(1, "alice");
    let (_, body) = call_protected(&ctx, Some(format!("Bearer {}", expired))).await;
    assert_eq!(body["data"], "Token expired");

    let issued = ctx.token_service.issue(1, "alice").unwrap();
    ctx.blacklist.revoke(&issued.claims.jti).await.unwrap();
    let (_, body) = call_protected(&ctx, Some(format!("Bearer {}", issued.token))).await;
    assert_eq!(body["data"], "Token is on the blacklist");

    let fresh = ctx.token_service.issue(1, "alice").unwrap();
    assert!(fresh.claims.exp > Utc::now().timestamp());
    ctx.blacklist.set_unavailable(true);
    let (_, body) = call_protected(&ctx, Some(format!("Bearer {}", fresh.token))).await;
    assert_eq!(body["data"], "Token blacklist unavailable");
  }
}
