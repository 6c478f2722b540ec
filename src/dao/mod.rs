/// Score and user document storage backends.
pub mod board_store;
/// Shared helpers for JSON files replaced atomically on write.
pub mod json_file;
/// Leaderboard collection persisted as a flat JSON file.
pub mod leaderboard;
/// Persisted record definitions.
pub mod models;
/// Storage abstraction layer shared by all backends.
pub mod storage;
