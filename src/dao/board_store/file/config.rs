use std::path::PathBuf;

use crate::dao::models::{ScoreEntity, UserEntity};

/// Runtime options describing where the board document lives and what to
/// seed it with on first run.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Location of the JSON board document.
    pub path: PathBuf,
    /// Score rows written when no document exists yet.
    pub seed_scores: Vec<ScoreEntity>,
    /// Admin account created when the document has no users.
    pub bootstrap_admin: UserEntity,
}

impl FileStoreConfig {
    /// Construct options for the given document path.
    pub fn new(
        path: impl Into<PathBuf>,
        seed_scores: Vec<ScoreEntity>,
        bootstrap_admin: UserEntity,
    ) -> Self {
        Self {
            path: path.into(),
            seed_scores,
            bootstrap_admin,
        }
    }
}
