//! File-backed leaderboard collection with whole-file read/overwrite.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::info;

use crate::dao::{json_file, models::TeamEntity, storage::StorageResult};

/// Flat leaderboard collection persisted as a single JSON array file.
///
/// Every operation re-reads the file, and every read-modify-write cycle holds
/// the store lock for its full duration so concurrent mutations cannot lose
/// updates through interleaved whole-file rewrites.
pub struct LeaderboardStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LeaderboardStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// All entries in file order, seeding the default collection on first
    /// access.
    pub async fn load(&self) -> StorageResult<Vec<TeamEntity>> {
        let _guard = self.lock.lock().await;
        self.load_locked().await
    }

    /// Insert the entry, or overwrite the points of the record with the same
    /// `(name, sport)` key. Returns `true` when a new entry was appended.
    pub async fn upsert(&self, entry: TeamEntity) -> StorageResult<bool> {
        let _guard = self.lock.lock().await;
        let mut teams = self.load_locked().await?;

        let created = match teams
            .iter_mut()
            .find(|team| team.key_matches(&entry.name, &entry.sport))
        {
            Some(existing) => {
                existing.points = entry.points;
                false
            }
            None => {
                teams.push(entry);
                true
            }
        };

        json_file::replace_document(&self.path, &teams).await?;
        Ok(created)
    }

    /// Overwrite the points of an existing entry. Returns `false` without
    /// touching the file when no record matches the key.
    pub async fn update(&self, entry: TeamEntity) -> StorageResult<bool> {
        let _guard = self.lock.lock().await;
        let mut teams = self.load_locked().await?;

        let Some(existing) = teams
            .iter_mut()
            .find(|team| team.key_matches(&entry.name, &entry.sport))
        else {
            return Ok(false);
        };
        existing.points = entry.points;

        json_file::replace_document(&self.path, &teams).await?;
        Ok(true)
    }

    /// Remove the entry matching the key pair. Absent entries are a no-op;
    /// returns whether a record was removed.
    pub async fn remove(&self, name: &str, sport: &str) -> StorageResult<bool> {
        let _guard = self.lock.lock().await;
        let mut teams = self.load_locked().await?;

        let before = teams.len();
        teams.retain(|team| !team.key_matches(name, sport));
        if teams.len() == before {
            return Ok(false);
        }

        json_file::replace_document(&self.path, &teams).await?;
        Ok(true)
    }

    /// Read the collection while the lock is already held. A missing file is
    /// replaced by the persisted default seed; a corrupt file is reported
    /// as-is and never overwritten.
    async fn load_locked(&self) -> StorageResult<Vec<TeamEntity>> {
        match json_file::read_document::<Vec<TeamEntity>>(&self.path).await? {
            Some(teams) => Ok(teams),
            None => {
                let seed = default_teams();
                json_file::replace_document(&self.path, &seed).await?;
                info!(path = %self.path.display(), "seeded default leaderboard");
                Ok(seed)
            }
        }
    }
}

/// Built-in collection written when no leaderboard file exists yet.
fn default_teams() -> Vec<TeamEntity> {
    [
        ("Team Alpha", "Football", 15),
        ("Team Beta", "Football", 12),
        ("Team Gamma", "Basketball", 28),
        ("Team Delta", "Kabaddi", 35),
        ("Team Echo", "Badminton", 18),
        ("Team Foxtrot", "Football", 10),
        ("Team Golf", "Basketball", 22),
        ("Team Hotel", "Kabaddi", 30),
    ]
    .into_iter()
    .map(|(name, sport, points)| TeamEntity {
        name: name.into(),
        sport: sport.into(),
        points,
    })
    .collect()
}
