use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Line shown to people for any failed creation, whatever the cause.
pub const GENERIC_FAILURE: &str = "Error creating user";

#[derive(Debug, Error)]
pub enum UserClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected status {status}: {message}")]
    Status { status: StatusCode, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

impl UserClientError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE
    }

    pub(crate) async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        match resp.text().await {
            Ok(body) => Self::from_status(status, &body),
            Err(err) => Self::Request(err),
        }
    }

    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .map(|b| b.error.clone())
            .unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::CONFLICT => {
                let email = parsed
                    .as_ref()
                    .and_then(|b| b.details.as_ref())
                    .and_then(|d| d.get("email"))
                    .and_then(|e| e.as_str())
                    .map(str::to_owned)
                    .unwrap_or(message);
                Self::DuplicateEmail(email)
            }
            StatusCode::BAD_REQUEST => Self::InvalidRequest(message),
            StatusCode::SERVICE_UNAVAILABLE => Self::Unavailable(message),
            status => Self::Status { status, message },
        }
    }
}
