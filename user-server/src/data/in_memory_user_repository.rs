use std::collections::HashMap;

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-local user store keyed by id.
///
/// Nothing survives a restart and there is no size bound. Email lookups scan
/// every entry since no secondary index is kept.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn save(&self, user: User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let replaced = users.insert(user.id, user.clone()).is_some();
        debug!(user_id = %user.id, replaced, "user saved");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let removed = users.remove(&id).is_some();
        debug!(user_id = %id, removed, "user delete requested");
        Ok(())
    }
}
