use actix_web::HttpResponse;
use serde::Serialize;

/// `code` of a successful envelope
pub const SUCCESS_CODE: i32 = 0;
/// `code` of a failed envelope
pub const ERROR_CODE: i32 = -1;

/// Header carrying the total row count on list endpoints
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// JSON envelope wrapping every response body
///
/// Successful calls carry `{code: 0, msg: "success", data}`; failures carry
/// `{code: -1, msg: "error", data: <message>}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
  pub code: i32,
  pub msg: &'static str,
  pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
  pub fn success(data: T) -> Self {
    Self {
      code: SUCCESS_CODE,
      msg: "success",
      data,
    }
  }
}

impl ApiResponse<String> {
  pub fn error(message: impl Into<String>) -> Self {
    Self {
      code: ERROR_CODE,
      msg: "error",
      data: message.into(),
    }
  }
}

/// 200 response with a success envelope
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
  HttpResponse::Ok().json(ApiResponse::success(data))
}

/// 200 response with a success envelope and the total row count header
pub fn ok_page<T: Serialize>(items: T, total: i64) -> HttpResponse {
  HttpResponse::Ok()
    .insert_header((TOTAL_COUNT_HEADER, total.to_string()))
    .json(ApiResponse::success(items))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_success_envelope() {
    let value = serde_json::to_value(ApiResponse::success("token")).unwrap();
    assert_eq!(value, json!({ "code": 0, "msg": "success", "data": "token" }));

    let value = serde_json::to_value(ApiResponse::success(())).unwrap();
    assert_eq!(value, json!({ "code": 0, "msg": "success", "data": null }));
  }

  #[test]
  fn test_error_envelope() {
    let value = serde_json::to_value(ApiResponse::error("Invalid token")).unwrap();
    assert_eq!(
      value,
      json!({ "code": -1, "msg": "error", "data": "Invalid token" })
    );
  }
}
