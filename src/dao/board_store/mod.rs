pub mod file;

use crate::dao::models::{ScoreEntity, UserEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for score records and admin users.
///
/// Score mutations are complete read-modify-write cycles: each call resolves
/// the current row, derives the new one, and persists it under one exclusive
/// guard, so concurrent admin sessions cannot lose updates through stale
/// reads.
pub trait BoardStore: Send + Sync {
    fn list_scores(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    /// Overwrite the score text of the game's row, keeping its live flag, or
    /// create the row live when absent. Returns the stored row.
    fn upsert_score(
        &self,
        game: &str,
        score_data: &str,
    ) -> BoxFuture<'static, StorageResult<ScoreEntity>>;
    /// Flip the live flag of an existing row. `None` when the game has no
    /// row; nothing is written in that case.
    fn toggle_live(&self, game: &str) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>>;
    /// Rewrite an existing row to the neutral placeholder. `None` when the
    /// game has no row; nothing is written in that case.
    fn reset_score(&self, game: &str) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>>;
    fn find_user(&self, username: &str) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
