use async_trait::async_trait;

use super::entities::User;
use crate::domain::shared::{Repository, RepositoryError};

/// Repository trait for user persistence operations
///
/// `get_by_id` and `get_by_username` return the user with its habits loaded;
/// `list` leaves the collection empty.
#[async_trait]
pub trait UserRepository: Repository<User> {
  /// Finds a non-deleted user by username, habits included
  async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError>;
}
