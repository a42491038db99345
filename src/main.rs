use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habitrack::{
  adapters::http::{ApiDependencies, RequestIdMiddleware, configure_api},
  domain::auth::AuthService,
  domain::habit::HabitService,
  domain::health::{HealthFlags, HealthService},
  domain::user::UserService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresHabitRepository, PostgresHealthRepository, PostgresUserRepository,
    },
    persistence::redis::RedisTokenBlacklist,
    security::{JwtTokenService, SaltedSha256Hasher},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Load configuration before logging so the configured level can be used
  let config = Config::load().map_err(|e| {
    eprintln!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting habitrack");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  if config.database.run_migrations {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations")
      .run(&db_pool)
      .await
      .map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        std::io::Error::other(format!("Migration error: {}", e))
      })?;
    tracing::info!("Database migrations completed");
  }

  // Set up Redis connection with timeout
  tracing::info!("Connecting to Redis");

  let redis_client = redis::Client::open(config.redis.url.clone()).map_err(|e| {
    tracing::error!("Failed to create Redis client: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid Redis URL: {}", e),
    )
  })?;

  let redis_conn = tokio::time::timeout(
    Duration::from_secs(config.redis.connect_timeout_seconds),
    redis_client.get_connection_manager(),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Redis connection timed out after {} seconds. Is Redis running?",
      config.redis.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Redis connection timed out after {} seconds",
        config.redis.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to Redis: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      "Could not connect to Redis. Is Redis running?",
    )
  })?;

  tracing::info!("Redis connection established");

  // Initialize adapters
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let habit_repo = Arc::new(PostgresHabitRepository::new(db_pool.clone()));
  let health_repo = Arc::new(PostgresHealthRepository::new(db_pool.clone()));
  let blacklist = Arc::new(RedisTokenBlacklist::new(redis_conn));
  let password_hasher = Arc::new(SaltedSha256Hasher::new());
  let token_service = Arc::new(
    JwtTokenService::new(&config.session.secret, config.session.token_ttl_seconds).map_err(
      |e| {
        tracing::error!("Invalid session settings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
      },
    )?,
  );

  // Initialize domain services
  let auth_service = Arc::new(AuthService::new(
    user_repo.clone(),
    password_hasher.clone(),
    token_service,
    blacklist,
  ));
  let user_service = Arc::new(UserService::new(
    user_repo.clone(),
    habit_repo.clone(),
    password_hasher,
  ));
  let habit_service = Arc::new(HabitService::new(habit_repo, user_repo));
  let health_service = Arc::new(HealthService::new(health_repo));

  let report = health_service.check(HealthFlags::default()).await;
  tracing::info!(
    server = ?report.server_status,
    database = ?report.database_status,
    "Startup health check"
  );

  let dependencies = ApiDependencies::new(auth_service, user_service, habit_service, health_service);

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  let mut server = HttpServer::new(move || {
    let dependencies = dependencies.clone();
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      .configure(|cfg| configure_api(cfg, dependencies))
  })
  .shutdown_timeout(config.server.shutdown_timeout_seconds);

  if let Some(workers) = config.server.workers {
    server = server.workers(workers);
  }

  server.bind((server_host, server_port))?.run().await
}
