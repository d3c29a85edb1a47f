//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (all four documents load)
//! - GET /health - Per-document status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, ResourceHealth};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::content::Resource;
use crate::loader::{LoadPolicy, ResourceSource};

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 only when every document fetches and decodes, otherwise 503
/// naming the documents that failed.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    let report = state.load().await;
    if report.is_complete() {
        return Ok(StatusCode::OK);
    }

    let failed = report
        .failures
        .iter()
        .map(|f| f.resource().file_name().to_string())
        .collect();
    Err(ApiError::NotReady(failed))
}

/// GET /health
///
/// Full health status with one entry per document.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let report = state.load().await;

    let resources: Vec<ResourceHealth> = Resource::ALL
        .into_iter()
        .map(|resource| {
            let error = report
                .failures
                .iter()
                .find(|f| f.resource() == resource)
                .map(|f| f.to_string());
            ResourceHealth {
                file: resource.file_name().to_string(),
                status: if error.is_some() { "error" } else { "ok" }.to_string(),
                error,
            }
        })
        .collect();

    let failed = report.failures.len();
    let overall_status = if failed == 0 {
        "healthy"
    } else if failed < Resource::ALL.len() {
        "degraded"
    } else {
        "unhealthy"
    };

    let policy = match state.loader.policy() {
        LoadPolicy::AllOrNothing => "all_or_nothing",
        LoadPolicy::PerResource => "per_resource",
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        source: state.loader.source().describe(),
        policy: policy.to_string(),
        resources,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
