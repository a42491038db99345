use actix_web::{HttpRequest, error, web};
use std::sync::Arc;

use crate::application::auth::{
  AuthenticateTokenUseCase, LoginUserUseCase, LogoutUserUseCase, RegisterUserUseCase,
};
use crate::application::habit::{
  CreateHabitUseCase, DeleteHabitUseCase, GetHabitUseCase, ListHabitsUseCase, UpdateHabitUseCase,
};
use crate::application::health::CheckHealthUseCase;
use crate::application::user::{
  CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::domain::auth::AuthService;
use crate::domain::habit::HabitService;
use crate::domain::health::HealthService;
use crate::domain::user::UserService;

use super::errors::ApiError;
use super::handlers::{auth, habits, health, users};
use super::middleware::AuthMiddleware;

/// Use cases behind the /auth scope
#[derive(Clone)]
pub struct AuthRouteDependencies {
  pub register_use_case: Arc<RegisterUserUseCase>,
  pub login_use_case: Arc<LoginUserUseCase>,
  pub logout_use_case: Arc<LogoutUserUseCase>,
}

/// Use cases behind the /user scope
#[derive(Clone)]
pub struct UserRouteDependencies {
  pub create_use_case: Arc<CreateUserUseCase>,
  pub get_use_case: Arc<GetUserUseCase>,
  pub update_use_case: Arc<UpdateUserUseCase>,
  pub delete_use_case: Arc<DeleteUserUseCase>,
  pub list_use_case: Arc<ListUsersUseCase>,
}

/// Use cases behind the /habit scope
#[derive(Clone)]
pub struct HabitRouteDependencies {
  pub create_use_case: Arc<CreateHabitUseCase>,
  pub get_use_case: Arc<GetHabitUseCase>,
  pub update_use_case: Arc<UpdateHabitUseCase>,
  pub delete_use_case: Arc<DeleteHabitUseCase>,
  pub list_use_case: Arc<ListHabitsUseCase>,
}

/// Everything the HTTP API needs, cloned into each worker
#[derive(Clone)]
pub struct ApiDependencies {
  pub health_use_case: Arc<CheckHealthUseCase>,
  pub authenticate_use_case: Arc<AuthenticateTokenUseCase>,
  pub auth: AuthRouteDependencies,
  pub users: UserRouteDependencies,
  pub habits: HabitRouteDependencies,
}

impl ApiDependencies {
  /// Builds every use case from the domain services
  pub fn new(
    auth_service: Arc<AuthService>,
    user_service: Arc<UserService>,
    habit_service: Arc<HabitService>,
    health_service: Arc<HealthService>,
  ) -> Self {
    Self {
      health_use_case: Arc::new(CheckHealthUseCase::new(health_service)),
      authenticate_use_case: Arc::new(AuthenticateTokenUseCase::new(auth_service.clone())),
      auth: AuthRouteDependencies {
        register_use_case: Arc::new(RegisterUserUseCase::new(auth_service.clone())),
        login_use_case: Arc::new(LoginUserUseCase::new(auth_service.clone())),
        logout_use_case: Arc::new(LogoutUserUseCase::new(auth_service)),
      },
      users: UserRouteDependencies {
        create_use_case: Arc::new(CreateUserUseCase::new(user_service.clone())),
        get_use_case: Arc::new(GetUserUseCase::new(user_service.clone())),
        update_use_case: Arc::new(UpdateUserUseCase::new(user_service.clone())),
        delete_use_case: Arc::new(DeleteUserUseCase::new(user_service.clone())),
        list_use_case: Arc::new(ListUsersUseCase::new(user_service)),
      },
      habits: HabitRouteDependencies {
        create_use_case: Arc::new(CreateHabitUseCase::new(habit_service.clone())),
        get_use_case: Arc::new(GetHabitUseCase::new(habit_service.clone())),
        update_use_case: Arc::new(UpdateHabitUseCase::new(habit_service.clone())),
        delete_use_case: Arc::new(DeleteHabitUseCase::new(habit_service.clone())),
        list_use_case: Arc::new(ListHabitsUseCase::new(habit_service)),
      },
    }
  }
}

fn binding_failed(err: impl std::fmt::Display, req: &HttpRequest) -> error::Error {
  tracing::debug!(path = %req.path(), error = %err, "Parameter binding failed");
  ApiError::Validation(format!("Parameter binding failed: {}", err)).into()
}

/// Configure the whole API
///
/// # Routes
///
/// - GET /health, /health/, /health/{flag}
/// - POST /auth/register, /auth/login, /auth/logout (token required)
/// - /user and /habit CRUD (token required)
///
/// Extractor failures (bad JSON, path or query values) are answered with the
/// error envelope like every other failure.
pub fn configure_api(cfg: &mut web::ServiceConfig, deps: ApiDependencies) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, req| binding_failed(err, req)))
    .app_data(web::PathConfig::default().error_handler(|err, req| binding_failed(err, req)))
    .app_data(web::QueryConfig::default().error_handler(|err, req| binding_failed(err, req)));

  let authenticate = deps.authenticate_use_case;

  cfg
    .service(
      web::scope("/health").configure(|cfg| configure_health_routes(cfg, deps.health_use_case)),
    )
    .service(
      web::scope("/auth")
        .configure(|cfg| configure_auth_routes(cfg, deps.auth, authenticate.clone())),
    )
    .service(
      web::scope("/user")
        .wrap(AuthMiddleware::new(authenticate.clone()))
        .configure(|cfg| configure_user_routes(cfg, deps.users)),
    )
    .service(
      web::scope("/habit")
        .wrap(AuthMiddleware::new(authenticate))
        .configure(|cfg| configure_habit_routes(cfg, deps.habits)),
    );
}

/// Configure health routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig, use_case: Arc<CheckHealthUseCase>) {
  cfg
    .app_data(web::Data::new(use_case))
    .route("", web::get().to(health::health_handler))
    .route("/", web::get().to(health::health_handler))
    .route("/{flag}", web::get().to(health::health_flag_handler));
}

/// Configure authentication routes; only logout requires a token
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  deps: AuthRouteDependencies,
  authenticate_use_case: Arc<AuthenticateTokenUseCase>,
) {
  cfg
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.logout_use_case))
    .route("/register", web::post().to(auth::register_handler))
    .route("/login", web::post().to(auth::login_handler))
    .service(
      web::resource("/logout")
        .wrap(AuthMiddleware::new(authenticate_use_case))
        .route(web::post().to(auth::logout_handler)),
    );
}

/// Configure user routes
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, deps: UserRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.get_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.delete_use_case))
    .app_data(web::Data::new(deps.list_use_case))
    .route("", web::get().to(users::list_users_handler))
    .route("", web::post().to(users::create_user_handler))
    .route("/i/{id}", web::get().to(users::get_user_by_id_handler))
    .route(
      "/u/{username}",
      web::get().to(users::get_user_by_username_handler),
    )
    .route("/{id}", web::put().to(users::update_user_handler))
    .route("/{id}", web::delete().to(users::delete_user_handler));
}

/// Configure habit routes
pub fn configure_habit_routes(cfg: &mut web::ServiceConfig, deps: HabitRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.get_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.delete_use_case))
    .app_data(web::Data::new(deps.list_use_case))
    .route("", web::get().to(habits::list_habits_handler))
    .route("", web::post().to(habits::create_habit_handler))
    .route("", web::delete().to(habits::delete_habit_handler))
    .route("/{id}", web::get().to(habits::get_habit_handler))
    .route("/{id}", web::put().to(habits::update_habit_handler));
}
