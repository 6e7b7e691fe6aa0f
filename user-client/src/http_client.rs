use crate::error::UserClientError;
use crate::{User, UserClient};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Clone)]
pub struct UserClientHttp {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CreateUserBody<'a> {
    name: &'a str,
    email: &'a str,
}

impl UserClientHttp {
    pub fn connect(endpoint: &str) -> Result<Self, UserClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserClient for UserClientHttp {
    async fn create_user(&self, name: String, email: String) -> Result<User, UserClientError> {
        let resp = self
            .client
            .post(format!("{}/users", self.base_url))
            .json(&CreateUserBody {
                name: &name,
                email: &email,
            })
            .send()
            .await?;

        if resp.status().is_success() {
            let user: User = resp.json().await?;
            debug!(user_id = %user.id, "user created");
            Ok(user)
        } else {
            Err(UserClientError::from_http_response(resp).await)
        }
    }

    async fn health(&self) -> Result<(), UserClientError> {
        let resp = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(UserClientError::from_http_response(resp).await)
        }
    }
}
