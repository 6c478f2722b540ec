use std::path::PathBuf;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

use crate::dao::{
    board_store::BoardStore,
    json_file,
    models::{ScoreEntity, UserEntity},
    storage::{StorageError, StorageResult},
};

use super::{config::FileStoreConfig, models::BoardDocument};

/// File-backed board store keeping a write-through in-memory document.
///
/// Reads are served from memory; every mutation rewrites the JSON document
/// and only commits to memory once the file replacement succeeded. Each
/// mutation holds the document write guard from the row lookup through the
/// commit, so interleaved writers never act on a stale row.
#[derive(Clone, Debug)]
pub struct FileBoardStore {
    path: Arc<PathBuf>,
    document: Arc<RwLock<BoardDocument>>,
}

impl FileBoardStore {
    /// Open the board document, creating and seeding it on first run.
    ///
    /// An existing but unparseable document is reported as corrupt and never
    /// overwritten.
    pub async fn open(config: FileStoreConfig) -> StorageResult<Self> {
        let FileStoreConfig {
            path,
            seed_scores,
            bootstrap_admin,
        } = config;

        let (mut document, mut dirty) = match json_file::read_document::<BoardDocument>(&path)
            .await?
        {
            Some(document) => (document, false),
            None => {
                info!(path = %path.display(), "board document not found; seeding initial scores");
                let document = BoardDocument {
                    users: Vec::new(),
                    scores: seed_scores,
                };
                (document, true)
            }
        };

        if document.users.is_empty() {
            info!(username = %bootstrap_admin.username, "creating bootstrap admin account");
            document.users.push(bootstrap_admin);
            dirty = true;
        }

        if dirty {
            json_file::replace_document(&path, &document).await?;
        }

        Ok(Self {
            path: Arc::new(path),
            document: Arc::new(RwLock::new(document)),
        })
    }

    /// Write the row into a copy of the document, replace the file, then
    /// commit the copy in memory. The caller holds the document write guard
    /// for the whole read-modify-write cycle.
    async fn commit_score(
        &self,
        document: &mut BoardDocument,
        row: ScoreEntity,
    ) -> StorageResult<ScoreEntity> {
        let mut updated = document.clone();
        updated.upsert_score(row.clone());
        json_file::replace_document(self.path.as_ref(), &updated).await?;
        *document = updated;
        Ok(row)
    }
}

impl BoardStore for FileBoardStore {
    fn list_scores(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let guard = store.document.read().await;
            Ok(guard.scores.clone())
        })
    }

    fn upsert_score(
        &self,
        game: &str,
        score_data: &str,
    ) -> BoxFuture<'static, StorageResult<ScoreEntity>> {
        let store = self.clone();
        let game = game.to_owned();
        let score_data = score_data.to_owned();
        Box::pin(async move {
            let mut guard = store.document.write().await;
            let row = match guard.find_score(&game).cloned() {
                Some(mut existing) => {
                    existing.score_data = score_data;
                    existing
                }
                None => ScoreEntity {
                    game,
                    score_data,
                    is_live: true,
                },
            };
            store.commit_score(&mut guard, row).await
        })
    }

    fn toggle_live(&self, game: &str) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>> {
        let store = self.clone();
        let game = game.to_owned();
        Box::pin(async move {
            let mut guard = store.document.write().await;
            let Some(mut row) = guard.find_score(&game).cloned() else {
                return Ok(None);
            };
            row.is_live = !row.is_live;
            store.commit_score(&mut guard, row).await.map(Some)
        })
    }

    fn reset_score(&self, game: &str) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>> {
        let store = self.clone();
        let game = game.to_owned();
        Box::pin(async move {
            let mut guard = store.document.write().await;
            if guard.find_score(&game).is_none() {
                return Ok(None);
            }
            store
                .commit_score(&mut guard, ScoreEntity::placeholder(game))
                .await
                .map(Some)
        })
    }

    fn find_user(&self, username: &str) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let store = self.clone();
        let username = username.to_owned();
        Box::pin(async move {
            let guard = store.document.read().await;
            Ok(guard.find_user(&username).cloned())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            fs::metadata(store.path.as_ref()).await.map_err(|source| {
                StorageError::unavailable(
                    format!("board document missing at `{}`", store.path.display()),
                    source,
                )
            })?;
            Ok(())
        })
    }
}
