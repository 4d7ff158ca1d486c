//! Health check handlers

use axum::Json;
use serde::{Deserialize, Serialize};

/// Name the service reports about itself
pub const SERVICE_NAME: &str = "insurance-premium-calculator";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check endpoint
///
/// The service holds no external connections, so being able to answer
/// means being healthy.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
