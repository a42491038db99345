//! In-memory adapters and a wired service context for unit tests.
//!
//! The fakes follow the Postgres adapters closely: users are soft-deleted,
//! live usernames are unique, habits need a live owner and the single-user
//! lookups preload habits in id order.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use crate::adapters::http::ApiDependencies;
use crate::domain::auth::{AuthService, BlacklistError, TokenBlacklist};
use crate::domain::habit::{Habit, HabitRepository, HabitService, NewHabit};
use crate::domain::health::{HealthRepository, HealthService};
use crate::domain::shared::{Repository, RepositoryError};
use crate::domain::user::{NewUser, User, UserRepository, UserService};
use crate::infrastructure::security::{JwtTokenService, SaltedSha256Hasher};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_TOKEN_TTL_SECONDS: u64 = 3600;

/// Shared tables behind the in-memory user and habit repositories
#[derive(Default)]
pub struct InMemoryStore {
  users: Mutex<BTreeMap<i64, User>>,
  habits: Mutex<BTreeMap<i64, Habit>>,
  next_id: AtomicI64,
  failing_habit_deletes: Mutex<HashSet<i64>>,
  last_page: Mutex<Option<(i64, i64)>>,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every later delete of this habit fail with a query error
  pub fn fail_habit_delete(&self, habit_id: i64) {
    self.failing_habit_deletes.lock().unwrap().insert(habit_id);
  }

  /// Offset and limit of the most recent `list` call
  pub fn last_page(&self) -> Option<(i64, i64)> {
    *self.last_page.lock().unwrap()
  }

  fn next_id(&self) -> i64 {
    self.next_id.fetch_add(1, Ordering::SeqCst) + 1
  }

  fn record_page(&self, offset: i64, limit: i64) {
    *self.last_page.lock().unwrap() = Some((offset, limit));
  }

  fn username_taken(users: &BTreeMap<i64, User>, username: &str, except: Option<i64>) -> bool {
    users
      .values()
      .any(|u| u.deleted_at.is_none() && u.username == username && Some(u.id) != except)
  }

  fn with_habits(&self, mut user: User) -> User {
    user.habits = self
      .habits
      .lock()
      .unwrap()
      .values()
      .filter(|h| h.user_id == user.id)
      .cloned()
      .collect();
    user
  }

  fn live_user(&self, id: i64) -> Option<User> {
    self
      .users
      .lock()
      .unwrap()
      .get(&id)
      .filter(|u| u.deleted_at.is_none())
      .cloned()
  }
}

fn page<T: Clone>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
  rows
    .skip(usize::try_from(offset).unwrap_or(0))
    .take(usize::try_from(limit).unwrap_or(0))
    .collect()
}

pub struct InMemoryUserRepository {
  store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
  pub fn new(store: Arc<InMemoryStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
  async fn create(&self, draft: NewUser) -> Result<User, RepositoryError> {
    let mut users = self.store.users.lock().unwrap();
    if InMemoryStore::username_taken(&users, &draft.username, None) {
      return Err(RepositoryError::DuplicateKey(draft.username));
    }

    let now = Utc::now();
    let user = User {
      id: self.store.next_id(),
      username: draft.username,
      password_hash: draft.password_hash,
      salt: draft.salt,
      status: draft.status,
      created_at: now,
      updated_at: now,
      deleted_at: None,
      habits: Vec::new(),
    };
    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
    let user = self.store.live_user(id).ok_or(RepositoryError::NotFound)?;
    Ok(self.store.with_habits(user))
  }

  async fn update(&self, user: User) -> Result<User, RepositoryError> {
    let mut users = self.store.users.lock().unwrap();
    if InMemoryStore::username_taken(&users, &user.username, Some(user.id)) {
      return Err(RepositoryError::DuplicateKey(user.username));
    }

    let stored = users
      .get_mut(&user.id)
      .filter(|u| u.deleted_at.is_none())
      .ok_or(RepositoryError::NotFound)?;
    stored.username = user.username.clone();
    stored.password_hash = user.password_hash.clone();
    stored.salt = user.salt.clone();
    stored.status = user.status;
    stored.updated_at = user.updated_at;
    Ok(user)
  }

  async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
    let mut users = self.store.users.lock().unwrap();
    let stored = users
      .get_mut(&id)
      .filter(|u| u.deleted_at.is_none())
      .ok_or(RepositoryError::NotFound)?;
    stored.deleted_at = Some(Utc::now());
    Ok(())
  }

  async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, RepositoryError> {
    self.store.record_page(offset, limit);
    let users = self.store.users.lock().unwrap();
    Ok(page(
      users.values().filter(|u| u.deleted_at.is_none()).cloned(),
      offset,
      limit,
    ))
  }

  async fn count(&self) -> Result<i64, RepositoryError> {
    let users = self.store.users.lock().unwrap();
    Ok(users.values().filter(|u| u.deleted_at.is_none()).count() as i64)
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
    let user = self
      .store
      .users
      .lock()
      .unwrap()
      .values()
      .find(|u| u.deleted_at.is_none() && u.username == username)
      .cloned()
      .ok_or(RepositoryError::NotFound)?;
    Ok(self.store.with_habits(user))
  }
}

pub struct InMemoryHabitRepository {
  store: Arc<InMemoryStore>,
}

impl InMemoryHabitRepository {
  pub fn new(store: Arc<InMemoryStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Repository<Habit> for InMemoryHabitRepository {
  async fn create(&self, draft: NewHabit) -> Result<Habit, RepositoryError> {
    if self.store.live_user(draft.user_id).is_none() {
      return Err(RepositoryError::MissingReference(format!(
        "user {}",
        draft.user_id
      )));
    }

    let now = Utc::now();
    let habit = Habit {
      id: self.store.next_id(),
      name: draft.name,
      info: draft.info,
      user_id: draft.user_id,
      created_at: now,
      updated_at: now,
    };
    self
      .store
      .habits
      .lock()
      .unwrap()
      .insert(habit.id, habit.clone());
    Ok(habit)
  }

  async fn get_by_id(&self, id: i64) -> Result<Habit, RepositoryError> {
    self
      .store
      .habits
      .lock()
      .unwrap()
      .get(&id)
      .cloned()
      .ok_or(RepositoryError::NotFound)
  }

  async fn update(&self, habit: Habit) -> Result<Habit, RepositoryError> {
    let mut habits = self.store.habits.lock().unwrap();
    let stored = habits.get_mut(&habit.id).ok_or(RepositoryError::NotFound)?;
    stored.name = habit.name.clone();
    stored.info = habit.info.clone();
    stored.updated_at = habit.updated_at;
    Ok(habit)
  }

  async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
    if self.store.failing_habit_deletes.lock().unwrap().contains(&id) {
      return Err(RepositoryError::QueryFailed(format!(
        "delete of habit {} rejected",
        id
      )));
    }

    self
      .store
      .habits
      .lock()
      .unwrap()
      .remove(&id)
      .map(|_| ())
      .ok_or(RepositoryError::NotFound)
  }

  async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Habit>, RepositoryError> {
    self.store.record_page(offset, limit);
    let habits = self.store.habits.lock().unwrap();
    Ok(page(habits.values().cloned(), offset, limit))
  }

  async fn count(&self) -> Result<i64, RepositoryError> {
    Ok(self.store.habits.lock().unwrap().len() as i64)
  }
}

impl HabitRepository for InMemoryHabitRepository {}

/// Blacklist backed by a set, switchable into an unreachable state
#[derive(Default)]
pub struct InMemoryTokenBlacklist {
  revoked: Mutex<HashSet<String>>,
  unavailable: AtomicBool,
}

impl InMemoryTokenBlacklist {
  pub fn set_unavailable(&self, unavailable: bool) {
    self.unavailable.store(unavailable, Ordering::SeqCst);
  }

  fn check_available(&self) -> Result<(), BlacklistError> {
    if self.unavailable.load(Ordering::SeqCst) {
      return Err(BlacklistError::Unavailable("connection refused".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
  async fn revoke(&self, token_id: &str) -> Result<(), BlacklistError> {
    self.check_available()?;
    self.revoked.lock().unwrap().insert(token_id.to_string());
    Ok(())
  }

  async fn is_revoked(&self, token_id: &str) -> Result<bool, BlacklistError> {
    self.check_available()?;
    Ok(self.revoked.lock().unwrap().contains(token_id))
  }
}

pub struct InMemoryHealthRepository {
  healthy: AtomicBool,
}

impl InMemoryHealthRepository {
  pub fn new(healthy: bool) -> Self {
    Self {
      healthy: AtomicBool::new(healthy),
    }
  }

  pub fn set_healthy(&self, healthy: bool) {
    self.healthy.store(healthy, Ordering::SeqCst);
  }
}

#[async_trait]
impl HealthRepository for InMemoryHealthRepository {
  async fn ping_database(&self) -> Result<(), RepositoryError> {
    if self.healthy.load(Ordering::SeqCst) {
      Ok(())
    } else {
      Err(RepositoryError::ConnectionFailed(
        "connection refused".to_string(),
      ))
    }
  }
}

/// Real hasher and token service over in-memory stores
pub struct TestContext {
  pub store: Arc<InMemoryStore>,
  pub user_repo: Arc<InMemoryUserRepository>,
  pub habit_repo: Arc<InMemoryHabitRepository>,
  pub hasher: Arc<SaltedSha256Hasher>,
  pub token_service: Arc<JwtTokenService>,
  pub blacklist: Arc<InMemoryTokenBlacklist>,
  pub health_repo: Arc<InMemoryHealthRepository>,
}

impl TestContext {
  pub fn new() -> Self {
    let store = Arc::new(InMemoryStore::new());
    Self {
      user_repo: Arc::new(InMemoryUserRepository::new(store.clone())),
      habit_repo: Arc::new(InMemoryHabitRepository::new(store.clone())),
      store,
      hasher: Arc::new(SaltedSha256Hasher::new()),
      token_service: Arc::new(
        JwtTokenService::new(TEST_SECRET, TEST_TOKEN_TTL_SECONDS).expect("valid token settings"),
      ),
      blacklist: Arc::new(InMemoryTokenBlacklist::default()),
      health_repo: Arc::new(InMemoryHealthRepository::new(true)),
    }
  }

  pub fn auth_service(&self) -> AuthService {
    AuthService::new(
      self.user_repo.clone(),
      self.hasher.clone(),
      self.token_service.clone(),
      self.blacklist.clone(),
    )
  }

  pub fn user_service(&self) -> UserService {
    UserService::new(
      self.user_repo.clone(),
      self.habit_repo.clone(),
      self.hasher.clone(),
    )
  }

  pub fn habit_service(&self) -> HabitService {
    HabitService::new(self.habit_repo.clone(), self.user_repo.clone())
  }

  pub fn health_service(&self) -> HealthService {
    HealthService::new(self.health_repo.clone())
  }

  /// A correctly signed token whose lifetime ended an hour ago
  pub fn expired_token(&self, user_id: i64, username: &str) -> String {
    let issued_at = Utc::now() - Duration::seconds(TEST_TOKEN_TTL_SECONDS as i64 + 3600);
    self
      .token_service
      .issue_at(user_id, username, issued_at)
      .expect("token issued")
      .token
  }

  /// Every HTTP use case wired against this context
  pub fn api_dependencies(&self) -> ApiDependencies {
    ApiDependencies::new(
      Arc::new(self.auth_service()),
      Arc::new(self.user_service()),
      Arc::new(self.habit_service()),
      Arc::new(self.health_service()),
    )
  }
}
