//! Whole-text multi-faith routes.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use revelacode_store::{MultiFaithText, TextSummary};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/texts", get(list_texts))
        .route("/texts/{text_type}", get(get_text))
}

#[derive(Deserialize)]
struct TextQuery {
    version: Option<String>,
}

/// GET /api/texts — every stored text, without content.
async fn list_texts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TextSummary>>, ApiError> {
    Ok(Json(state.texts.list_texts()?))
}

/// GET /api/texts/{type}?version=KJV
async fn get_text(
    State(state): State<Arc<AppState>>,
    Path(text_type): Path<String>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<MultiFaithText>, ApiError> {
    let Query(query) = query?;
    Ok(Json(
        state
            .texts
            .get_text(&text_type, query.version.as_deref())?,
    ))
}
