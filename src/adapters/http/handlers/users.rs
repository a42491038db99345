use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CreateUserRequest, UpdateUserRequest, UserPageQuery, UserResponse},
  errors::ApiError,
  response::{ok, ok_page},
};
use crate::application::user::{
  CreateUserCommand, CreateUserUseCase, DeleteUserUseCase, GetUserQuery, GetUserUseCase,
  ListUsersQuery, ListUsersUseCase, UpdateUserCommand, UpdateUserUseCase,
};

/// GET /user?page=&page_size=
pub async fn list_users_handler(
  query: web::Query<UserPageQuery>,
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = query.into_inner();
  let response = use_case
    .execute(ListUsersQuery {
      page: query.page,
      page_size: query.page_size,
    })
    .await?;

  tracing::debug!(
    page = response.pagination.page,
    page_size = response.pagination.page_size,
    total = response.total,
    "Listed users"
  );
  let users: Vec<UserResponse> = response.users.into_iter().map(UserResponse::from).collect();
  Ok(ok_page(users, response.total))
}

/// POST /user
pub async fn create_user_handler(
  request: web::Json<CreateUserRequest>,
  use_case: web::Data<Arc<CreateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let user = use_case
    .execute(CreateUserCommand {
      username: request.username,
      password: request.password,
    })
    .await?;

  Ok(ok(UserResponse::from(user)))
}

/// GET /user/i/{id}
pub async fn get_user_by_id_handler(
  id: web::Path<i64>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = use_case.execute(GetUserQuery::Id(id.into_inner())).await?;
  Ok(ok(UserResponse::from(user)))
}

/// GET /user/u/{username}
pub async fn get_user_by_username_handler(
  username: web::Path<String>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = use_case
    .execute(GetUserQuery::Username(username.into_inner()))
    .await?;
  Ok(ok(UserResponse::from(user)))
}

/// PUT /user/{id}
pub async fn update_user_handler(
  id: web::Path<i64>,
  request: web::Json<UpdateUserRequest>,
  use_case: web::Data<Arc<UpdateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let user = use_case
    .execute(UpdateUserCommand {
      id: id.into_inner(),
      username: request.into_inner().username,
    })
    .await?;

  Ok(ok(UserResponse::from(user)))
}

/// DELETE /user/{id}
pub async fn delete_user_handler(
  id: web::Path<i64>,
  use_case: web::Data<Arc<DeleteUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  use_case.execute(id.into_inner()).await?;
  Ok(ok(()))
}
