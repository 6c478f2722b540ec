use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::public::ScoreBoardResponse;

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
/// First event pushed to a freshly connected viewer, carrying the whole board.
pub struct SnapshotEvent(pub ScoreBoardResponse);

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast whenever a game's score text is written or reset.
pub struct ScoreUpdatedEvent {
    pub game: String,
    pub score_data: String,
    pub is_live: bool,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast whenever a game's live flag flips.
pub struct LiveStatusChangedEvent {
    pub game: String,
    pub is_live: bool,
}
