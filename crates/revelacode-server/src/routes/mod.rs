//! HTTP route handlers — matches the Express API surface consumed by the
//! frontends, deduplicated by path.

pub mod health;
pub mod legal;
pub mod prophecy;
pub mod texts;
pub mod verse;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(legal::routes())
        .merge(verse::routes())
        .merge(texts::routes())
        .merge(prophecy::routes())
}
