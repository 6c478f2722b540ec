//! DTO definitions used by the admin REST API and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::validate_required_text;

/// Payload creating a score record or overwriting its score text.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetScoreRequest {
    pub game: String,
    pub score_data: String,
}

impl Validate for SetScoreRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_required_text(&self.game, "game_required") {
            errors.add("game", e);
        }
        if let Err(e) = validate_required_text(&self.score_data, "score_data_required") {
            errors.add("score_data", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload addressing a single game on the board.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GameKeyRequest {
    pub game: String,
}

impl Validate for GameKeyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_required_text(&self.game, "game_required") {
            errors.add("game", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload writing a leaderboard entry. Omitted points default to zero.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LeaderboardEntryRequest {
    pub name: String,
    pub sport: String,
    #[serde(default)]
    #[schema(value_type = i32)]
    pub points: i32,
}

impl Validate for LeaderboardEntryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_required_text(&self.name, "name_required") {
            errors.add("name", e);
        }
        if let Err(e) = validate_required_text(&self.sport, "sport_required") {
            errors.add("sport", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload addressing a leaderboard entry by its `(name, sport)` key.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LeaderboardKeyRequest {
    pub name: String,
    pub sport: String,
}

impl Validate for LeaderboardKeyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_required_text(&self.name, "name_required") {
            errors.add("name", e);
        }
        if let Err(e) = validate_required_text(&self.sport, "sport_required") {
            errors.add("sport", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Acknowledgement returned by mutations that carry no further payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
}

impl ActionResponse {
    /// Acknowledgement for a mutation that went through.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of a live toggle, returning the flag the game landed on.
#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleLiveResponse {
    pub success: bool,
    pub is_live: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_score_rejects_blank_fields() {
        let payload = SetScoreRequest {
            game: "Football".into(),
            score_data: "  ".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.errors().contains_key("score_data"));

        let payload = SetScoreRequest {
            game: String::new(),
            score_data: "India 2 - 1 Pakistan".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.errors().contains_key("game"));
    }

    #[test]
    fn leaderboard_entry_requires_name_and_sport() {
        let payload = LeaderboardEntryRequest {
            name: "Team Alpha".into(),
            sport: "Football".into(),
            points: 0,
        };
        assert!(payload.validate().is_ok());

        let payload = LeaderboardEntryRequest {
            name: String::new(),
            sport: String::new(),
            points: 10,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.errors().contains_key("name"));
        assert!(errors.errors().contains_key("sport"));
    }
}
