//! Premium handlers

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::dto::premium::PremiumResponse;
use crate::error::ApiError;

/// Calculates an insurance premium
///
/// The body is taken as untyped JSON so that validation can report every
/// offending field rather than stopping at the first deserialization error.
pub async fn calculate_premium(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PremiumResponse>, ApiError> {
    let Json(payload) = payload?;

    let result = domain_premium::quote(&payload)?;

    tracing::info!(
        age_factor = %result.age_factor,
        risk_loading = %result.risk_loading,
        final_premium = %result.final_premium.amount(),
        "premium quoted"
    );

    Ok(Json(PremiumResponse::from(result)))
}
