// ABOUTME: Liveness endpoint
// ABOUTME: Reports service name and version inside the standard envelope

use chrono::Utc;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: i64,
    pub version: &'static str,
    pub service: &'static str,
}

pub async fn health_check() -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().timestamp(),
        version: env!("CARGO_PKG_VERSION"),
        service: "tagboard",
    })
}
