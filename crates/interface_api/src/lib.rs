//! HTTP API Layer
//!
//! This crate provides the REST API for the premium calculator using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for quotes, health and documentation
//! - **Middleware**: Request ids and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//! - **OpenAPI**: Machine-readable description of every route
//!
//! # Routes
//!
//! ```text
//! GET  /              - Service information
//! GET  /health        - Health check
//! POST /calculate     - Calculate an insurance premium
//! GET  /openapi.json  - OpenAPI document
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{docs, health, premium};
use crate::middleware::request_log_middleware;
use crate::openapi::{openapi_document, ApiInfo, OPENAPI_PATH};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub openapi: Arc<Value>,
}

impl AppState {
    /// Creates the state, building the OpenAPI document once
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            openapi: Arc::new(openapi_document(&ApiInfo::default())),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    Router::new()
        .route("/", get(docs::service_info))
        .route("/health", get(health::health_check))
        .route("/calculate", post(premium::calculate_premium))
        .route(OPENAPI_PATH, get(docs::openapi_json))
        .fallback(not_found)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No route matches the requested path".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn calculate_route_returns_quote() {
        let app = create_router(ApiConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"age": 65, "risk_level": "high", "coverage": 200000}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["final_premium"], 2250.0);
    }

    #[tokio::test]
    async fn health_route_responds() {
        let app = create_router(ApiConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
