//! Shared application state.

use std::sync::Arc;

use revelacode_core::RevelaConfig;
use revelacode_legal::LegalService;
use revelacode_scripture::{TextLibrary, VerseResolver, VerseSource};
use revelacode_store::SqliteStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: RevelaConfig,
    pub store: Arc<SqliteStore>,
    pub legal: LegalService,
    pub verses: VerseResolver,
    pub texts: TextLibrary,
}

impl AppState {
    /// Wire the services over one store handle and verse source.
    pub fn new(
        config: RevelaConfig,
        store: Arc<SqliteStore>,
        verse_source: Arc<dyn VerseSource>,
    ) -> Self {
        Self {
            legal: LegalService::new(store.clone()),
            verses: VerseResolver::new(store.clone(), verse_source),
            texts: TextLibrary::new(store.clone()),
            config,
            store,
        }
    }
}
