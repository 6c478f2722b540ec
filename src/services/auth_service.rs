//! Login, logout, and token authorization for the admin surface.

use std::time::SystemTime;

use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::ServiceError,
    state::{AdminSession, SharedState},
};

/// Witness that a request passed admin authorization.
///
/// Instances are only minted by [`authorize`], so mutating service calls that
/// take an `AdminContext` cannot be reached without a valid session token.
#[derive(Clone, Debug)]
pub struct AdminContext {
    username: String,
    token: String,
}

impl AdminContext {
    /// Account the authorized session belongs to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Session token the context was minted from.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Verify the presented credentials and mint a session token.
pub async fn login(
    state: &SharedState,
    payload: LoginRequest,
) -> Result<LoginResponse, ServiceError> {
    payload.validate()?;

    let user = state
        .board_store()
        .find_user(&payload.username)
        .await?
        .ok_or_else(|| ServiceError::Unauthorized("invalid username or password".into()))?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(ServiceError::Unauthorized(
            "invalid username or password".into(),
        ));
    }

    let token = Uuid::new_v4().simple().to_string();
    let session = AdminSession {
        username: user.username,
        issued_at: SystemTime::now(),
    };
    state.sessions().insert(token.clone(), session.clone());
    info!(username = %session.username, "admin logged in");

    Ok(LoginResponse::from((token, session)))
}

/// Resolve a presented session token to an [`AdminContext`].
pub fn authorize(state: &SharedState, token: &str) -> Result<AdminContext, ServiceError> {
    let session = state
        .sessions()
        .get(token)
        .ok_or_else(|| ServiceError::Unauthorized("invalid or expired admin token".into()))?;

    Ok(AdminContext {
        username: session.username.clone(),
        token: token.to_string(),
    })
}

/// Revoke the session behind the authorized context. Revoking an already
/// removed token is a no-op.
pub fn logout(state: &SharedState, context: &AdminContext) {
    if state.sessions().remove(context.token()).is_some() {
        info!(username = %context.username(), "admin logged out");
    }
}

/// Hex-encoded SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare a password against the stored digest.
fn verify_password(password: &str, stored_hash: &str) -> bool {
    constant_time_eq(hash_password(password).as_bytes(), stored_hash.as_bytes())
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
