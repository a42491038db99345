use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::response::ok;
use crate::application::health::CheckHealthUseCase;

/// Basic liveness without probing dependencies
///
/// GET /health and GET /health/
pub async fn health_handler(use_case: web::Data<Arc<CheckHealthUseCase>>) -> HttpResponse {
  ok(use_case.execute(None).await)
}

/// Liveness with the components selected by the bitmask
///
/// GET /health/{flag} (0 none, 1 database, 3 all)
pub async fn health_flag_handler(
  flag: web::Path<i64>,
  use_case: web::Data<Arc<CheckHealthUseCase>>,
) -> HttpResponse {
  ok(use_case.execute(Some(flag.into_inner())).await)
}
