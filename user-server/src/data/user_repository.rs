use crate::domain::error::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// The only way workflows observe or mutate users, whatever the backing store.
///
/// Lookups report absence as `Ok(None)`, never as an error. A backend that
/// cannot reach its store answers with [`DomainError::StorageUnavailable`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Inserts the user, or replaces the one stored under the same id.
    async fn save(&self, user: User) -> Result<(), DomainError>;
    /// Removes the user if present. Missing ids are a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
