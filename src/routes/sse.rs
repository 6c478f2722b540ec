use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{
    error::AppError,
    services::{score_service, sse_events, sse_service},
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/sse/scores",
    responses((status = 200, description = "Viewer event stream, opened with a full board snapshot", content_type = "text/event-stream", body = String))
)]
/// Stream score events to a viewer, starting with a snapshot of the board.
pub async fn score_stream(
    State(state): State<SharedState>,
) -> Result<Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>>, AppError> {
    // Subscribe before building the snapshot; a write landing between the
    // two then arrives as a regular event instead of being missed.
    let receiver = sse_service::subscribe(&state);
    let board = score_service::get_all_scores(&state).await?;
    let snapshot = sse_events::snapshot_event(board)
        .map_err(|err| AppError::Internal(format!("failed to serialize snapshot: {err}")))?;

    info!("new viewer SSE connection");
    Ok(sse_service::to_sse_stream(snapshot, receiver))
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/scores", get(score_stream))
}
