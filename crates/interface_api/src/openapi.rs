//! OpenAPI document
//!
//! The document is assembled from the same constants the validator and rating
//! tables use, so the published constraints cannot drift from the enforced ones.

use std::fs;
use std::path::Path;

use anyhow::Context;
use domain_premium::{RiskLevel, MAX_AGE, MIN_AGE};
use serde_json::{json, Map, Value};

/// OpenAPI specification version the document conforms to
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Path the document is served from
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Service title
pub const TITLE: &str = "Insurance Premium Calculator";

/// Service description
pub const DESCRIPTION: &str =
    "Calculate insurance premiums based on age, risk level, and coverage";

/// Metadata placed in the document's `info` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Builds the OpenAPI document for every route the router serves
pub fn openapi_document(info: &ApiInfo) -> Value {
    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": info.title,
            "description": info.description,
            "version": info.version,
        },
        "paths": paths(),
        "components": {
            "schemas": schemas(),
        },
    })
}

fn paths() -> Value {
    let mut paths = Map::new();
    paths.insert("/".to_string(), json!({ "get": root_operation() }));
    paths.insert("/health".to_string(), json!({ "get": health_operation() }));
    paths.insert("/calculate".to_string(), json!({ "post": calculate_operation() }));
    paths.insert(OPENAPI_PATH.to_string(), json!({ "get": openapi_operation() }));
    Value::Object(paths)
}

fn root_operation() -> Value {
    json!({
        "summary": "Root",
        "description": "Service information",
        "operationId": "root",
        "responses": {
            "200": json_response("Service information", schema_ref("ServiceInfo")),
        },
    })
}

fn health_operation() -> Value {
    json!({
        "summary": "Health Check",
        "description": "Health check endpoint for monitoring",
        "operationId": "health_check",
        "responses": {
            "200": json_response("Service is healthy", schema_ref("HealthResponse")),
        },
    })
}

fn calculate_operation() -> Value {
    let mut responses = Map::new();
    responses.insert(
        "200".to_string(),
        json_response("Calculated premium with breakdown", schema_ref("PremiumResponse")),
    );
    responses.insert(
        "400".to_string(),
        json_response("Malformed JSON body", schema_ref("ErrorResponse")),
    );
    responses.insert(
        "422".to_string(),
        json_response("Validation Error", schema_ref("ErrorResponse")),
    );
    responses.insert(
        "500".to_string(),
        json_response("Unexpected calculation failure", schema_ref("ErrorResponse")),
    );

    json!({
        "summary": "Calculate Premium",
        "description": "Calculate insurance premium based on age, risk level, and coverage. \
                        Premium = Base × (1 + AgeFactor) × (1 + RiskLoading)",
        "operationId": "calculate_premium",
        "requestBody": {
            "required": true,
            "content": {
                "application/json": { "schema": schema_ref("PremiumRequest") },
            },
        },
        "responses": responses,
    })
}

fn openapi_operation() -> Value {
    json!({
        "summary": "OpenAPI Document",
        "description": "This document",
        "operationId": "openapi_json",
        "responses": {
            "200": json_response("OpenAPI document", json!({ "type": "object" })),
        },
    })
}

fn schemas() -> Value {
    let mut schemas = Map::new();
    schemas.insert("RiskLevel".to_string(), risk_level_schema());
    schemas.insert("PremiumRequest".to_string(), premium_request_schema());
    schemas.insert("PremiumResponse".to_string(), premium_response_schema());
    schemas.insert("FieldViolation".to_string(), field_violation_schema());
    schemas.insert("ErrorResponse".to_string(), error_response_schema());
    schemas.insert(
        "HealthResponse".to_string(),
        string_object_schema("HealthResponse", &["status", "service", "version"]),
    );
    schemas.insert("ServiceInfo".to_string(), service_info_schema());
    Value::Object(schemas)
}

fn risk_level_schema() -> Value {
    let risk_levels: Vec<&str> = RiskLevel::ALL.iter().map(|r| r.as_str()).collect();
    json!({
        "title": "RiskLevel",
        "description": "Risk assessment level",
        "type": "string",
        "enum": risk_levels,
    })
}

fn premium_request_schema() -> Value {
    let age = json!({
        "title": "Age",
        "description": format!("Age of the insured person ({}-{} years)", MIN_AGE, MAX_AGE),
        "type": "integer",
        "minimum": MIN_AGE,
        "maximum": MAX_AGE,
    });
    let risk_level = json!({
        "description": "Risk assessment level: low, medium, or high",
        "allOf": [schema_ref("RiskLevel")],
    });
    let coverage = json!({
        "title": "Coverage",
        "description": "Coverage amount in currency (must be positive)",
        "type": "number",
        "minimum": 0,
        "exclusiveMinimum": true,
    });

    json!({
        "title": "PremiumRequest",
        "type": "object",
        "required": ["age", "risk_level", "coverage"],
        "properties": {
            "age": age,
            "risk_level": risk_level,
            "coverage": coverage,
        },
        "example": {
            "age": 35,
            "risk_level": "medium",
            "coverage": 100000,
        },
    })
}

fn premium_response_schema() -> Value {
    let mut properties = Map::new();
    for (name, title, description) in [
        ("base_premium", "Base Premium", "Base premium amount"),
        ("age_factor", "Age Factor", "Age-based multiplier (as decimal, e.g., 0.10 = 10%)"),
        ("risk_loading", "Risk Loading", "Risk-based multiplier (as decimal)"),
        ("final_premium", "Final Premium", "Calculated total premium"),
        ("coverage", "Coverage", "Coverage amount"),
    ] {
        properties.insert(name.to_string(), typed_property(title, description, "number"));
    }
    properties.insert(
        "breakdown".to_string(),
        typed_property("Breakdown", "Human-readable calculation breakdown", "string"),
    );
    let required: Vec<String> = properties.keys().cloned().collect();

    json!({
        "title": "PremiumResponse",
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

fn field_violation_schema() -> Value {
    json!({
        "title": "FieldViolation",
        "type": "object",
        "required": ["loc", "kind", "message", "input"],
        "properties": {
            "loc": {
                "title": "Location",
                "type": "array",
                "items": { "type": "string" },
            },
            "kind": {
                "title": "Kind",
                "type": "string",
                "enum": ["missing_field", "type_mismatch", "range_violation", "enum_mismatch"],
            },
            "message": { "title": "Message", "type": "string" },
            "input": { "title": "Input", "description": "The rejected value" },
        },
    })
}

fn error_response_schema() -> Value {
    json!({
        "title": "ErrorResponse",
        "type": "object",
        "required": ["error", "message"],
        "properties": {
            "error": { "title": "Error", "type": "string" },
            "message": { "title": "Message", "type": "string" },
            "details": {
                "title": "Details",
                "type": "array",
                "items": schema_ref("FieldViolation"),
            },
        },
    })
}

fn service_info_schema() -> Value {
    let mut schema = string_object_schema("ServiceInfo", &["message", "version", "docs"]);
    schema["properties"]["endpoints"] = json!({
        "type": "object",
        "additionalProperties": { "type": "string" },
    });
    schema
}

fn string_object_schema(title: &str, fields: &[&str]) -> Value {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| (field.to_string(), json!({ "type": "string" })))
        .collect();
    json!({
        "title": title,
        "type": "object",
        "properties": properties,
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema },
        },
    })
}

fn typed_property(title: &str, description: &str, kind: &str) -> Value {
    json!({
        "title": title,
        "description": description,
        "type": kind,
    })
}

/// Writes the document to `output` as JSON indented by two spaces
///
/// Returns the document that was written.
///
/// # Errors
///
/// Fails when the file cannot be created or written, e.g. when `output` is a
/// directory or its parent does not exist.
pub fn export_to(output: &Path, info: &ApiInfo) -> anyhow::Result<Value> {
    let document = openapi_document(info);
    let rendered =
        serde_json::to_string_pretty(&document).context("failed to render OpenAPI document")?;

    fs::write(output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::debug!(path = %output.display(), "OpenAPI document exported");
    Ok(document)
}
