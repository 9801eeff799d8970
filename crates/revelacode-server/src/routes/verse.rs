//! Verse lookup route.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::state::AppState;
use revelacode_store::VerseKey;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/verse", post(resolve_verse))
}

/// POST /api/verse — `{religion, book, chapter, verse, version}` to `{text}`.
async fn resolve_verse(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VerseKey>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(key) = payload?;
    let text = state.verses.resolve_verse(&key).await?;
    Ok(Json(serde_json::json!({ "text": text })))
}
