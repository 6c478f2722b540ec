//! Application-level configuration loading, including the seeded score set.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::models::ScoreEntity;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";
/// Environment variable naming the bootstrap admin account.
const ADMIN_USERNAME_ENV: &str = "ADMIN_USERNAME";
/// Environment variable holding the bootstrap admin password.
const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";
/// Login name used when [`ADMIN_USERNAME_ENV`] is unset.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password used when [`ADMIN_PASSWORD_ENV`] is unset.
const DEFAULT_ADMIN_PASSWORD: &str = "admin";
/// Default path of the score and user document.
const DEFAULT_BOARD_PATH: &str = "data/board.json";
/// Default path of the leaderboard collection.
const DEFAULT_LEADERBOARD_PATH: &str = "data/leaderboard.json";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    games: Vec<String>,
    seed_scores: Vec<SeedScore>,
    board_path: PathBuf,
    leaderboard_path: PathBuf,
    admin_username: String,
    admin_password: String,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in board when the file is absent or unreadable. Admin
    /// credentials always come from the environment.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let mut config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        games = app_config.games.len(),
                        "loaded score board layout from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.admin_username = credential_from_env(ADMIN_USERNAME_ENV, DEFAULT_ADMIN_USERNAME);
        config.admin_password = credential_from_env(ADMIN_PASSWORD_ENV, DEFAULT_ADMIN_PASSWORD);
        config
    }

    /// Build a configuration with the default board layout and credentials
    /// but custom storage locations. Useful when embedding the server.
    pub fn with_paths(
        board_path: impl Into<PathBuf>,
        leaderboard_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            board_path: board_path.into(),
            leaderboard_path: leaderboard_path.into(),
            ..Self::default()
        }
    }

    /// Fixed set of games shown on the board, in display order.
    pub fn games(&self) -> &[String] {
        &self.games
    }

    /// Whether the given name is one of the configured games.
    pub fn is_known_game(&self, game: &str) -> bool {
        self.games.iter().any(|known| known == game)
    }

    /// Location of the score and user document.
    pub fn board_path(&self) -> &Path {
        &self.board_path
    }

    /// Location of the leaderboard collection file.
    pub fn leaderboard_path(&self) -> &Path {
        &self.leaderboard_path
    }

    /// Login name of the bootstrap admin account.
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Password of the bootstrap admin account.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Score records written on the very first boot, all marked live.
    pub fn seed_score_entities(&self) -> Vec<ScoreEntity> {
        self.seed_scores
            .iter()
            .map(|seed| ScoreEntity {
                game: seed.game.clone(),
                score_data: seed.score_data.clone(),
                is_live: true,
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed_scores: default_seed_scores(),
            board_path: PathBuf::from(DEFAULT_BOARD_PATH),
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_PATH),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Initial score text advertised for a game before any admin writes to it.
pub struct SeedScore {
    /// Game the seed belongs to.
    pub game: String,
    /// Score text shown live on first boot.
    pub score_data: String,
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    games: Option<Vec<String>>,
    seed_scores: Option<Vec<RawSeedScore>>,
    board_path: Option<PathBuf>,
    leaderboard_path: Option<PathBuf>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            games: value.games.unwrap_or(defaults.games),
            seed_scores: value
                .seed_scores
                .map(|seeds| seeds.into_iter().map(Into::into).collect::<Vec<_>>())
                .unwrap_or(defaults.seed_scores),
            board_path: value.board_path.unwrap_or(defaults.board_path),
            leaderboard_path: value.leaderboard_path.unwrap_or(defaults.leaderboard_path),
            admin_username: defaults.admin_username,
            admin_password: defaults.admin_password,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single seed entry inside the configuration file.
struct RawSeedScore {
    game: String,
    score: String,
}

impl From<RawSeedScore> for SeedScore {
    fn from(value: RawSeedScore) -> Self {
        Self {
            game: value.game,
            score_data: value.score,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Read a credential variable, warning when the built-in default is used.
fn credential_from_env(var: &str, default: &str) -> String {
    match env::var(var).ok().map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!("{var} not set; using the built-in default credentials");
            default.to_string()
        }
    }
}

/// Built-in board layout shipped with the binary.
fn default_games() -> Vec<String> {
    ["Football", "Kabaddi", "Basketball", "Badminton"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Scores advertised on an empty installation.
fn default_seed_scores() -> Vec<SeedScore> {
    vec![
        SeedScore {
            game: "Football".to_string(),
            score_data: "India 2 - 1 Pakistan".to_string(),
        },
        SeedScore {
            game: "Kabaddi".to_string(),
            score_data: "Team A 35 - 28 Team B".to_string(),
        },
        SeedScore {
            game: "Basketball".to_string(),
            score_data: "Lakers 108 - 102 Bulls".to_string(),
        },
        SeedScore {
            game: "Badminton".to_string(),
            score_data: "Player X 21 - 19 Player Y".to_string(),
        },
    ]
}
