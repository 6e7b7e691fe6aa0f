use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("user already exists: {0}")]
    DuplicateEmail(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("validation failed: {message}")]
    ValidationFailed {
        field: &'static str,
        code: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        DomainError::ValidationFailed {
            field,
            code,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::DuplicateEmail(_) => StatusCode::CONFLICT,
            DomainError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            DomainError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let details = match self {
            DomainError::DuplicateEmail(email) => Some(json!({ "email": email })),
            DomainError::ValidationFailed { field, code, .. } => {
                Some(json!({ "field": field, "code": code }))
            }
            DomainError::StorageUnavailable(_) => None,
        };
        let body = ErrorBody {
            error: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
