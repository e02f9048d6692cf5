//! Liveness endpoint, mounted at the root next to `/movie`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cinedex_db::repositories::MovieRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored movie count; `null` when the store could not be queried.
    pub movies: Option<i64>,
}

/// GET /health
///
/// Always 200: a store that cannot answer is reported as `degraded` rather
/// than failing the request.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let movies = match cinedex_db::health_check(&state.pool).await {
        Ok(()) => MovieRepo::count(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Movie count failed"))
            .ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            None
        }
    };

    let db_healthy = movies.is_some();
    Json(HealthReport {
        status: if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        movies,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
