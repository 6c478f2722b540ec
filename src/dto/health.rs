use serde::Serialize;
use utoipa::ToSchema;

/// Payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the board document behind the store is reachable.
    pub status: HealthStatus,
}

/// Reachability of the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The board document answered the probe.
    Ok,
    /// The board document could not be reached.
    Degraded,
}

impl HealthResponse {
    /// Report a reachable storage layer.
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }

    /// Report that the board document cannot be reached.
    pub fn degraded() -> Self {
        Self {
            status: HealthStatus::Degraded,
        }
    }
}
