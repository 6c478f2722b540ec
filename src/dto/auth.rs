//! DTO definitions used by the login and logout endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{format_system_time, validation::validate_required_text},
    state::AdminSession,
};

/// Credentials presented to obtain an admin token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_required_text(&self.username, "username_required") {
            errors.add("username", e);
        }
        if let Err(e) = validate_required_text(&self.password, "password_required") {
            errors.add("password", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Token handed out after a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub issued_at: String,
}

impl From<(String, AdminSession)> for LoginResponse {
    fn from((token, session): (String, AdminSession)) -> Self {
        Self {
            token,
            username: session.username,
            issued_at: format_system_time(session.issued_at),
        }
    }
}
