mod feed;

use std::{sync::Arc, time::SystemTime};

use dashmap::DashMap;

use crate::{
    config::AppConfig,
    dao::{
        board_store::{
            BoardStore,
            file::{FileBoardStore, FileStoreConfig},
        },
        leaderboard::LeaderboardStore,
        models::UserEntity,
        storage::StorageResult,
    },
    services::auth_service,
};

pub use self::feed::ScoreFeed;

pub type SharedState = Arc<AppState>;

#[derive(Clone)]
/// Record of a successful login, kept per admin token.
pub struct AdminSession {
    /// Account the token was issued to.
    pub username: String,
    /// Moment the login succeeded.
    pub issued_at: SystemTime,
}

/// Central application state storing the persistence handles and live admin
/// sessions.
pub struct AppState {
    config: AppConfig,
    board_store: Arc<dyn BoardStore>,
    leaderboard: LeaderboardStore,
    sessions: DashMap<String, AdminSession>,
    feed: ScoreFeed,
}

impl AppState {
    /// Open the storage backends described by `config` and assemble the
    /// shared state, wrapped in an [`Arc`] so it can be cloned cheaply.
    pub async fn initialize(config: AppConfig) -> StorageResult<SharedState> {
        let bootstrap_admin = UserEntity {
            username: config.admin_username().to_string(),
            password_hash: auth_service::hash_password(config.admin_password()),
        };
        let store_config = FileStoreConfig::new(
            config.board_path(),
            config.seed_score_entities(),
            bootstrap_admin,
        );
        let board_store = FileBoardStore::open(store_config).await?;
        let leaderboard = LeaderboardStore::new(config.leaderboard_path());

        Ok(Arc::new(Self {
            config,
            board_store: Arc::new(board_store),
            leaderboard,
            sessions: DashMap::new(),
            feed: ScoreFeed::new(),
        }))
    }

    /// Runtime configuration the server was assembled from.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the score and user document store.
    pub fn board_store(&self) -> Arc<dyn BoardStore> {
        self.board_store.clone()
    }

    /// File-backed leaderboard collection.
    pub fn leaderboard(&self) -> &LeaderboardStore {
        &self.leaderboard
    }

    /// Registry of live admin sessions keyed by their bearer token.
    pub fn sessions(&self) -> &DashMap<String, AdminSession> {
        &self.sessions
    }

    /// Event feed fanning score updates out to connected viewers.
    pub fn feed(&self) -> &ScoreFeed {
        &self.feed
    }
}
