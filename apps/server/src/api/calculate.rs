use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use networth_core::portfolio::summary::{PositionSummary, PositionSummaryRequest};
use serde_json::Value;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Single-position calculator. Unlike `/api/portfolio`, every field is
/// required and malformed input is rejected.
async fn calculate_position(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<PositionSummary>> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    let request = PositionSummaryRequest::from_value(&payload)?;
    let summary = state.valuation_service.summarize_position(request).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calculate", post(calculate_position))
}
