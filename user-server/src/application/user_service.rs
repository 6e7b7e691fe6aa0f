use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::data::user_repository::UserRepository;
use crate::domain::{
    error::DomainError,
    user::{NewUser, User},
};

pub struct UserService<R: UserRepository + 'static> {
    repo: Arc<R>,
    // Serializes the email check and the save across every clone.
    create_lock: Arc<Mutex<()>>,
}

impl<R: UserRepository + 'static> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            create_lock: Arc::clone(&self.create_lock),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        let _guard = self.create_lock.lock().await;

        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(DomainError::DuplicateEmail(new_user.email));
        }

        let user = User::new(new_user.name, new_user.email);
        self.repo.save(user.clone()).await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Number of stored users; fails when the backend cannot be reached.
    pub async fn count_users(&self) -> Result<usize, DomainError> {
        Ok(self.repo.find_all().await?.len())
    }
}
