//! Static prophecy and symbol data.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/symbols", get(list_symbols))
        .route("/prophecies", get(list_prophecies))
}

#[derive(Debug, Clone, Serialize)]
pub struct Symbol {
    pub symbol: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prophecy {
    pub id: &'static str,
    pub verse: &'static str,
    pub meaning: &'static str,
}

pub const SYMBOLS: &[Symbol] = &[
    Symbol {
        symbol: "Lamb",
        meaning: "Christ as the sacrifice that takes away sin.",
    },
    Symbol {
        symbol: "Dragon",
        meaning: "Satan, the adversary who opposes God's people.",
    },
    Symbol {
        symbol: "Beast",
        meaning: "Political power set against God.",
    },
    Symbol {
        symbol: "Seven Seals",
        meaning: "Judgments revealed in sequence before the end.",
    },
    Symbol {
        symbol: "Babylon",
        meaning: "A corrupt system of worldly power and false worship.",
    },
    Symbol {
        symbol: "New Jerusalem",
        meaning: "The restored dwelling of God with His people.",
    },
];

pub const PROPHECIES: &[Prophecy] = &[
    Prophecy {
        id: "1",
        verse: "Isaiah 53:5",
        meaning: "The suffering of Christ brings healing.",
    },
    Prophecy {
        id: "2",
        verse: "Joel 2:28",
        meaning: "God will pour out His spirit on all people.",
    },
];

/// GET /api/symbols
async fn list_symbols() -> Json<&'static [Symbol]> {
    Json(SYMBOLS)
}

/// GET /api/prophecies
async fn list_prophecies() -> Json<&'static [Prophecy]> {
    Json(PROPHECIES)
}
