use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::public::{LeaderboardEntryView, LeaderboardQuery, ScoreBoardResponse},
    error::AppError,
    services::{leaderboard_service, score_service},
    state::SharedState,
};

/// Public read-only endpoints exposing the board and the leaderboard.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/scores", get(get_scores))
        .route("/leaderboard", get(get_leaderboard))
}

#[utoipa::path(
    get,
    path = "/scores",
    tag = "public",
    responses((status = 200, description = "Score cell for every configured game", body = ScoreBoardResponse))
)]
/// Return every configured game with its current score cell.
pub async fn get_scores(
    State(state): State<SharedState>,
) -> Result<Json<ScoreBoardResponse>, AppError> {
    let payload = score_service::get_all_scores(&state).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "public",
    params(("sport" = Option<String>, Query, description = "Exact sport name to narrow the listing to")),
    responses((status = 200, description = "Entries sorted by points descending", body = [LeaderboardEntryView]))
)]
/// Return the leaderboard sorted by points, optionally filtered by sport.
pub async fn get_leaderboard(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntryView>>, AppError> {
    let sport = query.sport.as_deref().filter(|sport| !sport.is_empty());
    let payload = leaderboard_service::get_leaderboard(&state, sport).await?;
    Ok(Json(payload))
}
