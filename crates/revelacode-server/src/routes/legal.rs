//! Legal document routes: public read, token-guarded update.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;
use revelacode_core::Error;
use revelacode_store::LegalDocument;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/legal/update", post(update_legal_doc))
        .route("/legal/{doc_type}", get(get_legal_doc))
}

#[derive(Deserialize)]
struct UpdateLegalRequest {
    #[serde(rename = "type")]
    doc_type: Option<String>,
    content: Option<String>,
    version: Option<String>,
}

/// GET /api/legal/{type} — `{type, content, lastUpdated, version}`.
async fn get_legal_doc(
    State(state): State<Arc<AppState>>,
    Path(doc_type): Path<String>,
) -> Result<Json<LegalDocument>, ApiError> {
    Ok(Json(state.legal.get_document(&doc_type)?))
}

/// POST /api/legal/update — create or replace a document by type.
async fn update_legal_doc(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<UpdateLegalRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authorize_admin(&state, &headers)?;
    let Json(req) = payload?;

    let doc = state.legal.upsert_document(
        req.doc_type.as_deref(),
        req.content.as_deref(),
        req.version.as_deref(),
    )?;

    Ok(Json(serde_json::json!({
        "message": "Document updated",
        "doc": doc,
    })))
}

/// Require `Authorization: Bearer <token>` when an admin token is configured.
fn authorize_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        return Ok(());
    };

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    if presented == Some(expected) {
        Ok(())
    } else {
        warn!("Rejected legal document update without a valid admin token");
        Err(Error::Unauthorized("Missing or invalid admin token".into()).into())
    }
}
