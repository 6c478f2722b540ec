use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a health payload after probing the storage layer.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    if let Err(err) = state.board_store().health_check().await {
        warn!(error = %err, "storage health check failed");
        return HealthResponse::degraded();
    }

    HealthResponse::ok()
}
