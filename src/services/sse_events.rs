use serde::Serialize;
use tracing::warn;

use crate::{
    dao::models::ScoreEntity,
    dto::{
        public::ScoreBoardResponse,
        sse::{LiveStatusChangedEvent, ScoreUpdatedEvent, ServerEvent, SnapshotEvent},
    },
    state::SharedState,
};

const EVENT_SNAPSHOT: &str = "snapshot";
const EVENT_SCORE_UPDATED: &str = "score_updated";
const EVENT_LIVE_STATUS_CHANGED: &str = "live_status_changed";

/// Broadcast the written (or reset) score record of a single game.
pub fn broadcast_score_updated(state: &SharedState, score: &ScoreEntity) {
    let payload = ScoreUpdatedEvent {
        game: score.game.clone(),
        score_data: score.score_data.clone(),
        is_live: score.is_live,
    };
    send_event(state, EVENT_SCORE_UPDATED, &payload);
}

/// Broadcast a flipped live flag.
pub fn broadcast_live_status_changed(state: &SharedState, game: &str, is_live: bool) {
    let payload = LiveStatusChangedEvent {
        game: game.to_string(),
        is_live,
    };
    send_event(state, EVENT_LIVE_STATUS_CHANGED, &payload);
}

/// Build the full-board event pushed to every fresh viewer connection.
pub fn snapshot_event(board: ScoreBoardResponse) -> serde_json::Result<ServerEvent> {
    ServerEvent::json(Some(EVENT_SNAPSHOT.to_string()), &SnapshotEvent(board))
}

fn send_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.feed().publish(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
