use serde::{Deserialize, Serialize};

/// Score text shown for a game with no active match.
pub const NO_LIVE_MATCH: &str = "No live match";

/// Score record for a single game, keyed by the game name.
///
/// Exactly one record exists per known game; a missing record stands for the
/// neutral placeholder state and is synthesized at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntity {
    /// Game this record belongs to (unique within the board).
    pub game: String,
    /// Free-form score text shown to viewers.
    pub score_data: String,
    /// Whether the game currently has a live match.
    pub is_live: bool,
}

impl ScoreEntity {
    /// Record rendered for a game without a stored row, and written back by
    /// a score reset.
    pub fn placeholder(game: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            score_data: NO_LIVE_MATCH.to_string(),
            is_live: false,
        }
    }
}

/// Leaderboard record identified by the `(name, sport)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Display name of the team.
    pub name: String,
    /// Sport the team competes in.
    pub sport: String,
    /// Accumulated points.
    pub points: i32,
}

impl TeamEntity {
    /// Whether this record is addressed by the given key pair.
    pub fn key_matches(&self, name: &str, sport: &str) -> bool {
        self.name == name && self.sport == sport
    }
}

/// Admin account allowed to mutate the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEntity {
    /// Unique login name.
    pub username: String,
    /// Hex-encoded SHA-256 digest of the password.
    pub password_hash: String,
}
