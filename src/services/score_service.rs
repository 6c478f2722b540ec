//! Score mutations and the read-side projection of the board.

use indexmap::IndexMap;
use tracing::info;
use validator::Validate;

use crate::{
    dao::models::ScoreEntity,
    dto::{
        admin::{GameKeyRequest, SetScoreRequest},
        public::{ScoreBoardResponse, ScoreView},
    },
    error::ServiceError,
    services::{auth_service::AdminContext, sse_events},
    state::SharedState,
};

/// Assemble the full board in configured game order, substituting the
/// neutral placeholder for games without a stored record.
pub async fn get_all_scores(state: &SharedState) -> Result<ScoreBoardResponse, ServiceError> {
    let stored = state.board_store().list_scores().await?;

    let mut scores = IndexMap::new();
    for game in state.config().games() {
        let entity = stored
            .iter()
            .find(|score| score.game == *game)
            .cloned()
            .unwrap_or_else(|| ScoreEntity::placeholder(game.clone()));
        scores.insert(game.clone(), ScoreView::from(entity));
    }

    Ok(ScoreBoardResponse { scores })
}

/// Create the game's score record or overwrite its score text, then notify
/// connected viewers.
///
/// A fresh record starts live; an existing record keeps its live flag.
pub async fn set_score(
    state: &SharedState,
    context: &AdminContext,
    payload: SetScoreRequest,
) -> Result<(), ServiceError> {
    payload.validate()?;
    if !state.config().is_known_game(&payload.game) {
        return Err(ServiceError::InvalidInput(format!(
            "unknown game `{}`",
            payload.game
        )));
    }

    let entity = state
        .board_store()
        .upsert_score(&payload.game, &payload.score_data)
        .await?;

    info!(username = %context.username(), game = %entity.game, "score updated");
    sse_events::broadcast_score_updated(state, &entity);
    Ok(())
}

/// Flip the live flag of an existing score record and return the new value.
pub async fn toggle_live(
    state: &SharedState,
    context: &AdminContext,
    payload: GameKeyRequest,
) -> Result<bool, ServiceError> {
    payload.validate()?;

    let entity = state
        .board_store()
        .toggle_live(&payload.game)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("game `{}` not found", payload.game)))?;

    info!(
        username = %context.username(),
        game = %entity.game,
        is_live = entity.is_live,
        "live status toggled"
    );
    sse_events::broadcast_live_status_changed(state, &entity.game, entity.is_live);
    Ok(entity.is_live)
}

/// Reset an existing record to the neutral placeholder; the row is kept, not
/// deleted.
pub async fn clear_score(
    state: &SharedState,
    context: &AdminContext,
    payload: GameKeyRequest,
) -> Result<(), ServiceError> {
    payload.validate()?;

    let entity = state
        .board_store()
        .reset_score(&payload.game)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("game `{}` not found", payload.game)))?;

    info!(username = %context.username(), game = %entity.game, "score cleared");
    sse_events::broadcast_score_updated(state, &entity);
    Ok(())
}
