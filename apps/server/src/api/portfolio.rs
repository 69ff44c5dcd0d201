use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use chrono::Utc;
use networth_core::portfolio::valuation::{PortfolioRequest, PortfolioValuation};
use serde_json::{Map, Value};

use crate::{error::ApiResult, main_lib::AppState};

/// Lenient body parse: malformed JSON or a non-object root reads as `{}`.
fn parse_payload(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) if value.is_object() => value,
        Ok(other) => {
            tracing::warn!("Portfolio payload is not an object ({}); treating as empty", other);
            Value::Object(Map::new())
        }
        Err(e) => {
            if !body.is_empty() {
                tracing::warn!("Malformed portfolio payload ({}); treating as empty", e);
            }
            Value::Object(Map::new())
        }
    }
}

async fn value_portfolio(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<PortfolioValuation>> {
    let payload = parse_payload(&body);
    let request = PortfolioRequest::from_value(&payload)?;
    let valuation = state
        .valuation_service
        .value_portfolio(request, Utc::now())
        .await?;
    Ok(Json(valuation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/portfolio", post(value_portfolio))
}
