use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::{ScoreEntity, TeamEntity};

/// Query accepted by the leaderboard listing.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Exact sport name to narrow the listing to; blank means no filter.
    pub sport: Option<String>,
}

/// Score cell rendered for one game of the board.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoreView {
    pub score_data: String,
    pub is_live: bool,
}

impl From<ScoreEntity> for ScoreView {
    fn from(entity: ScoreEntity) -> Self {
        Self {
            score_data: entity.score_data,
            is_live: entity.is_live,
        }
    }
}

/// Full board keyed by game name, in the configured display order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ScoreBoardResponse {
    #[schema(value_type = Object)]
    pub scores: IndexMap<String, ScoreView>,
}

/// Leaderboard row exposed to viewers.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntryView {
    pub name: String,
    pub sport: String,
    pub points: i32,
}

impl From<TeamEntity> for LeaderboardEntryView {
    fn from(entity: TeamEntity) -> Self {
        Self {
            name: entity.name,
            sport: entity.sport,
            points: entity.points,
        }
    }
}
