//! Health route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// GET /api/health — liveness plus collection counts.
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stats = state.store.get_stats().ok();
    Json(serde_json::json!({
        "status": if stats.is_some() { "healthy" } else { "degraded" },
        "service": "revelacode",
        "version": env!("CARGO_PKG_VERSION"),
        "legalDocuments": stats.as_ref().map(|s| s.legal_documents).unwrap_or(0),
        "scriptureVerses": stats.as_ref().map(|s| s.scripture_verses).unwrap_or(0),
        "multiFaithTexts": stats.as_ref().map(|s| s.multi_faith_texts).unwrap_or(0),
    }))
}
