use tracing::warn;

use crate::{
    dto::health::{HealthResponse, HealthStatus},
    state::SharedState,
};

/// Report whether the user data file can still be written, logging failures.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let status = match state.users().health_check().await {
        Ok(()) => HealthStatus::Ok,
        Err(err) => {
            warn!(error = %err, "user storage health check failed");
            HealthStatus::Degraded
        }
    };

    HealthResponse { status }
}
