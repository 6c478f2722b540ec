use serde::{Deserialize, Serialize};

use crate::dao::models::{ScoreEntity, UserEntity};

/// On-disk document grouping admin users and score rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Admin accounts allowed to mutate the board.
    #[serde(default)]
    pub users: Vec<UserEntity>,
    /// One score row per game that has ever been written.
    #[serde(default)]
    pub scores: Vec<ScoreEntity>,
}

impl BoardDocument {
    /// Look up the score row for a game.
    pub fn find_score(&self, game: &str) -> Option<&ScoreEntity> {
        self.scores.iter().find(|row| row.game == game)
    }

    /// Replace the row with the same game key, or append a new one.
    pub fn upsert_score(&mut self, score: ScoreEntity) {
        match self.scores.iter_mut().find(|row| row.game == score.game) {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
    }

    /// Look up an admin account by login name.
    pub fn find_user(&self, username: &str) -> Option<&UserEntity> {
        self.users.iter().find(|user| user.username == username)
    }
}
