use axum::{
    Extension, Json, Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::post,
};

use crate::{
    dto::admin::{
        ActionResponse, GameKeyRequest, LeaderboardEntryRequest, LeaderboardKeyRequest,
        SetScoreRequest, ToggleLiveResponse,
    },
    error::AppError,
    services::{
        auth_service::{self, AdminContext},
        leaderboard_service, score_service,
    },
    state::SharedState,
};

pub(crate) const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin-only endpoints mutating the score board and the leaderboard.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/score", post(set_score))
        .route("/admin/score/toggle", post(toggle_live))
        .route("/admin/score/clear", post(clear_score))
        .route("/admin/leaderboard/add", post(add_leaderboard_entry))
        .route("/admin/leaderboard/update", post(update_leaderboard_entry))
        .route("/admin/leaderboard/delete", post(delete_leaderboard_entry))
        .route_layer(middleware::from_fn_with_state(state, require_admin_session))
}

/// Write the score text for a game, creating the record when absent.
#[utoipa::path(
    post,
    path = "/admin/score",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = SetScoreRequest,
    responses((status = 200, description = "Score written", body = ActionResponse))
)]
pub async fn set_score(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<SetScoreRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    score_service::set_score(&state, &context, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Flip the live flag of an existing score record.
#[utoipa::path(
    post,
    path = "/admin/score/toggle",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = GameKeyRequest,
    responses((status = 200, description = "Live flag flipped", body = ToggleLiveResponse))
)]
pub async fn toggle_live(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<GameKeyRequest>,
) -> Result<Json<ToggleLiveResponse>, AppError> {
    let is_live = score_service::toggle_live(&state, &context, payload).await?;
    Ok(Json(ToggleLiveResponse {
        success: true,
        is_live,
    }))
}

/// Reset a game back to the neutral placeholder.
#[utoipa::path(
    post,
    path = "/admin/score/clear",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = GameKeyRequest,
    responses((status = 200, description = "Score cleared", body = ActionResponse))
)]
pub async fn clear_score(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<GameKeyRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    score_service::clear_score(&state, &context, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Insert a leaderboard entry or overwrite the points of an existing one.
#[utoipa::path(
    post,
    path = "/admin/leaderboard/add",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = LeaderboardEntryRequest,
    responses((status = 200, description = "Entry written", body = ActionResponse))
)]
pub async fn add_leaderboard_entry(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<LeaderboardEntryRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    leaderboard_service::upsert_entry(&state, &context, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Overwrite the points of an existing leaderboard entry.
#[utoipa::path(
    post,
    path = "/admin/leaderboard/update",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = LeaderboardEntryRequest,
    responses(
        (status = 200, description = "Entry updated", body = ActionResponse),
        (status = 404, description = "No entry with that name and sport")
    )
)]
pub async fn update_leaderboard_entry(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<LeaderboardEntryRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    leaderboard_service::update_entry(&state, &context, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Remove a leaderboard entry; removing an absent entry is a no-op.
#[utoipa::path(
    post,
    path = "/admin/leaderboard/delete",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin session token issued by /auth/login")),
    request_body = LeaderboardKeyRequest,
    responses((status = 200, description = "Entry removed if it existed", body = ActionResponse))
)]
pub async fn delete_leaderboard_entry(
    State(state): State<SharedState>,
    Extension(context): Extension<AdminContext>,
    Json(payload): Json<LeaderboardKeyRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    leaderboard_service::delete_entry(&state, &context, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Resolve the token header to an [`AdminContext`] and stash it in the
/// request extensions for the handler.
pub(crate) async fn require_admin_session(
    State(state): State<SharedState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin token header `X-Admin-Token`".into())
        })?;

    let context = auth_service::authorize(&state, &provided)?;
    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}
