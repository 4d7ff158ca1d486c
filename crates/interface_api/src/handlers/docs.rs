//! Service description and OpenAPI handlers

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::dto::premium::ServiceInfoResponse;
use crate::openapi::{OPENAPI_PATH, TITLE};
use crate::AppState;

/// Root endpoint describing the service
pub async fn service_info() -> Json<ServiceInfoResponse> {
    let endpoints = BTreeMap::from([(
        "calculate".to_string(),
        "POST /calculate - Calculate insurance premium".to_string(),
    )]);

    Json(ServiceInfoResponse {
        message: format!("{} API", TITLE),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: OPENAPI_PATH.to_string(),
        endpoints,
    })
}

/// Serves the OpenAPI document
pub async fn openapi_json(State(state): State<AppState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}
