//! Leaderboard reads and the admin mutations that maintain the collection.

use tracing::info;
use validator::Validate;

use crate::{
    dao::models::TeamEntity,
    dto::{
        admin::{LeaderboardEntryRequest, LeaderboardKeyRequest},
        public::LeaderboardEntryView,
    },
    error::ServiceError,
    services::auth_service::AdminContext,
    state::SharedState,
};

/// Entries sorted by points descending, optionally narrowed to a single
/// sport. Ties keep their stored order.
pub async fn get_leaderboard(
    state: &SharedState,
    sport: Option<&str>,
) -> Result<Vec<LeaderboardEntryView>, ServiceError> {
    let mut teams = state.leaderboard().load().await?;

    if let Some(sport) = sport {
        teams.retain(|team| team.sport == sport);
    }
    teams.sort_by(|a, b| b.points.cmp(&a.points));

    Ok(teams.into_iter().map(Into::into).collect())
}

/// Insert the entry, or overwrite the points of the record sharing its
/// `(name, sport)` key.
pub async fn upsert_entry(
    state: &SharedState,
    context: &AdminContext,
    payload: LeaderboardEntryRequest,
) -> Result<(), ServiceError> {
    payload.validate()?;

    let entity = TeamEntity {
        name: payload.name,
        sport: payload.sport,
        points: payload.points,
    };
    let created = state.leaderboard().upsert(entity.clone()).await?;

    info!(
        username = %context.username(),
        name = %entity.name,
        sport = %entity.sport,
        created,
        "leaderboard entry written"
    );
    Ok(())
}

/// Overwrite the points of an existing entry; fails when the key is absent.
pub async fn update_entry(
    state: &SharedState,
    context: &AdminContext,
    payload: LeaderboardEntryRequest,
) -> Result<(), ServiceError> {
    payload.validate()?;

    let entity = TeamEntity {
        name: payload.name,
        sport: payload.sport,
        points: payload.points,
    };
    let updated = state.leaderboard().update(entity.clone()).await?;
    if !updated {
        return Err(ServiceError::NotFound(format!(
            "team `{}` ({}) not found on the leaderboard",
            entity.name, entity.sport
        )));
    }

    info!(
        username = %context.username(),
        name = %entity.name,
        sport = %entity.sport,
        "leaderboard entry updated"
    );
    Ok(())
}

/// Remove the entry matching the key pair. Removing an absent entry
/// succeeds without touching the rest of the collection.
pub async fn delete_entry(
    state: &SharedState,
    context: &AdminContext,
    payload: LeaderboardKeyRequest,
) -> Result<(), ServiceError> {
    payload.validate()?;

    let removed = state
        .leaderboard()
        .remove(&payload.name, &payload.sport)
        .await?;

    info!(
        username = %context.username(),
        name = %payload.name,
        sport = %payload.sport,
        removed,
        "leaderboard entry delete"
    );
    Ok(())
}
