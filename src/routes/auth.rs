use axum::{Extension, Json, Router, extract::State, middleware, routing::post};

use crate::{
    dto::{
        admin::ActionResponse,
        auth::{LoginRequest, LoginResponse},
    },
    error::AppError,
    services::auth_service::{self, AdminContext},
    state::SharedState,
};

use super::admin::require_admin_session;

/// Login and logout endpoints managing admin sessions.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(state, require_admin_session))
        .route("/auth/login", post(login))
}

/// Exchange credentials for an admin session token.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(auth_service::login(&state, payload).await?))
}

/// Revoke the presented admin session token.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    responses((status = 200, description = "Session revoked", body = ActionResponse))
)]
pub async fn logout(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
) -> Json<ActionResponse> {
    auth_service::logout(&state, &context);
    Json(ActionResponse::ok())
}
