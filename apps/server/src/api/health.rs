use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::main_lib::AppState;

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct ReadyStatus {
    status: &'static str,
    quote_source: &'static str,
}

async fn readyz(State(state): State<Arc<AppState>>) -> Json<ReadyStatus> {
    Json(ReadyStatus {
        status: "ok",
        quote_source: state.quote_source_id,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
