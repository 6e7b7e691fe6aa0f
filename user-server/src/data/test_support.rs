//! Repository doubles for exercising storage failures.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data::in_memory_user_repository::InMemoryUserRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;
use uuid::Uuid;

fn offline() -> DomainError {
    DomainError::StorageUnavailable("connection refused".into())
}

/// Every call fails; counts how often each lookup and write was attempted.
#[derive(Default)]
pub struct UnreachableRepository {
    email_lookups: AtomicUsize,
    saves: AtomicUsize,
}

impl UnreachableRepository {
    pub fn email_lookups(&self) -> usize {
        self.email_lookups.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Err(offline())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, DomainError> {
        Err(offline())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        Err(offline())
    }

    async fn save(&self, _user: User) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(offline())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), DomainError> {
        Err(offline())
    }
}

/// Reads go to a real in-memory store; writes fail.
#[derive(Default)]
pub struct ReadOnlyRepository {
    inner: InMemoryUserRepository,
    saves: AtomicUsize,
}

impl ReadOnlyRepository {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for ReadOnlyRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn save(&self, _user: User) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(offline())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), DomainError> {
        Err(offline())
    }
}
