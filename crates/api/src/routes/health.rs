//! Liveness endpoint for load balancers and deploy checks.
//!
//! Mounted at the root next to `/employees`. Always answers 200; a dead
//! database shows up as `"status": "degraded"` rather than an error status,
//! so the process is not restarted for an outage it cannot fix.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Overall verdict reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The employee store answered `SELECT 1`.
    Ok,
    /// The process is up but the employee store is unreachable.
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_store_check(db_healthy: bool) -> Self {
        Self {
            service: env!("CARGO_PKG_NAME"),
            status: if db_healthy {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match roster_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Employee store unreachable");
            false
        }
    };
    Json(HealthResponse::from_store_check(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
