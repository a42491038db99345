use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    CreateHabitRequest, DeleteHabitRequest, HabitPageQuery, HabitResponse, UpdateHabitRequest,
  },
  errors::ApiError,
  response::{ok, ok_page},
};
use crate::application::habit::{
  CreateHabitCommand, CreateHabitUseCase, DeleteHabitCommand, DeleteHabitUseCase, GetHabitUseCase,
  ListHabitsQuery, ListHabitsUseCase, UpdateHabitCommand, UpdateHabitUseCase,
};

/// GET /habit?page=&pageSize=
pub async fn list_habits_handler(
  query: web::Query<HabitPageQuery>,
  use_case: web::Data<Arc<ListHabitsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = query.into_inner();
  let response = use_case
    .execute(ListHabitsQuery {
      page: query.page,
      page_size: query.page_size,
    })
    .await?;

  tracing::debug!(
    page = response.pagination.page,
    page_size = response.pagination.page_size,
    total = response.total,
    "Listed habits"
  );
  let habits: Vec<HabitResponse> = response
    .habits
    .into_iter()
    .map(HabitResponse::from)
    .collect();
  Ok(ok_page(habits, response.total))
}

/// POST /habit
pub async fn create_habit_handler(
  request: web::Json<CreateHabitRequest>,
  use_case: web::Data<Arc<CreateHabitUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let habit = use_case
    .execute(CreateHabitCommand {
      user_id: request.user_id,
      name: request.name,
      info: request.info,
    })
    .await?;

  Ok(ok(HabitResponse::from(habit)))
}

/// GET /habit/{id}
pub async fn get_habit_handler(
  id: web::Path<i64>,
  use_case: web::Data<Arc<GetHabitUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let habit = use_case.execute(id.into_inner()).await?;
  Ok(ok(HabitResponse::from(habit)))
}

/// PUT /habit/{id}
pub async fn update_habit_handler(
  id: web::Path<i64>,
  request: web::Json<UpdateHabitRequest>,
  use_case: web::Data<Arc<UpdateHabitUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let habit = use_case
    .execute(UpdateHabitCommand {
      id: id.into_inner(),
      name: request.name,
      info: request.info,
    })
    .await?;

  Ok(ok(HabitResponse::from(habit)))
}

/// DELETE /habit
/// Body: { "user_id": .., "habit_id": .. }
pub async fn delete_habit_handler(
  request: web::Json<DeleteHabitRequest>,
  use_case: web::Data<Arc<DeleteHabitUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  use_case
    .execute(DeleteHabitCommand {
      user_id: request.user_id,
      habit_id: request.habit_id,
    })
    .await?;

  Ok(ok(()))
}
