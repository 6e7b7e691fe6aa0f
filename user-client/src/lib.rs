use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod error;
mod http_client;

pub use error::{GENERIC_FAILURE, UserClientError};
pub use http_client::UserClientHttp;

/// Used when neither a flag nor `USER_API_URL` names the service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserClient: Send + Sync {
    async fn create_user(&self, name: String, email: String) -> Result<User, UserClientError>;
    async fn health(&self) -> Result<(), UserClientError>;
}
