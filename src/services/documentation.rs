use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the score board backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::public::get_scores,
        crate::routes::public::get_leaderboard,
        crate::routes::sse::score_stream,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::admin::set_score,
        crate::routes::admin::toggle_live,
        crate::routes::admin::clear_score,
        crate::routes::admin::add_leaderboard_entry,
        crate::routes::admin::update_leaderboard_entry,
        crate::routes::admin::delete_leaderboard_entry,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::public::ScoreView,
            crate::dto::public::ScoreBoardResponse,
            crate::dto::public::LeaderboardEntryView,
            crate::dto::auth::LoginRequest,
            crate::dto::auth::LoginResponse,
            crate::dto::admin::SetScoreRequest,
            crate::dto::admin::GameKeyRequest,
            crate::dto::admin::LeaderboardEntryRequest,
            crate::dto::admin::LeaderboardKeyRequest,
            crate::dto::admin::ActionResponse,
            crate::dto::admin::ToggleLiveResponse,
            crate::dto::sse::SnapshotEvent,
            crate::dto::sse::ScoreUpdatedEvent,
            crate::dto::sse::LiveStatusChangedEvent,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "public", description = "Read-only board and leaderboard views"),
        (name = "auth", description = "Admin session management"),
        (name = "admin", description = "Token-gated board mutations"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;
