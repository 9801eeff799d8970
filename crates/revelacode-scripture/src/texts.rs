//! Whole-text multi-faith library. Independent of verse-level lookup.

use std::sync::Arc;

use revelacode_core::{Error, Result};
use revelacode_store::{MultiFaithText, SqliteStore, TextSummary, TextType};

pub struct TextLibrary {
    store: Arc<SqliteStore>,
}

impl TextLibrary {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }

    pub fn list_texts(&self) -> Result<Vec<TextSummary>> {
        self.store.list_texts()
    }

    /// Look up a text by raw type string and optional version.
    pub fn get_text(&self, text_type: &str, version: Option<&str>) -> Result<MultiFaithText> {
        let text_type: TextType = text_type.trim().parse().map_err(Error::Validation)?;
        let version = version.map(str::trim).filter(|v| !v.is_empty());
        self.store
            .find_text(text_type, version)?
            .ok_or_else(|| Error::NotFound("Text not found".into()))
    }
}
