//! Data Transfer Objects
//!
//! Response types for the health endpoints.

use serde::Serialize;

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    /// Where the documents are read from
    pub source: String,
    /// Active load policy
    pub policy: String,
    /// One entry per published document
    pub resources: Vec<ResourceHealth>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Load status of one document
#[derive(Debug, Serialize)]
pub struct ResourceHealth {
    pub file: String,
    /// "ok" or "error"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
