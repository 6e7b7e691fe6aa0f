//! Boundary checks for inbound requests. Failures never reach the workflow.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DomainError;
use crate::domain::user::NewUser;
use crate::presentation::dto::CreateUserRequest;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

const MISSING_FIELD: &str = "missing_field";
const INVALID_FORMAT: &str = "invalid_format";

pub fn validate_create_user(request: CreateUserRequest) -> Result<NewUser, DomainError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::validation("name", MISSING_FIELD, "name must not be empty"));
    }
    if request.email.is_empty() {
        return Err(DomainError::validation("email", MISSING_FIELD, "email must not be empty"));
    }
    if !EMAIL_RE.is_match(&request.email) {
        return Err(DomainError::validation(
            "email",
            INVALID_FORMAT,
            "email must be a valid email address",
        ));
    }

    Ok(NewUser {
        name: request.name,
        email: request.email,
    })
}
