//! Legal document service.
//!
//! Documents are keyed on their type. An upsert overwrites the previous
//! content and version in place; no history is kept.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use revelacode_core::{Error, Result};
use revelacode_store::{LegalDocType, LegalDocument, SqliteStore};

pub struct LegalService {
    store: Arc<SqliteStore>,
}

impl LegalService {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }

    /// Look up the document for a raw type string.
    pub fn get_document(&self, doc_type: &str) -> Result<LegalDocument> {
        let doc_type = parse_doc_type(doc_type)?;
        self.store
            .find_legal_doc(doc_type)?
            .ok_or_else(|| Error::NotFound("Document not found".into()))
    }

    /// Create or replace the document of `doc_type`, stamping it with the
    /// current time.
    ///
    /// Content and version are replaced together: a missing or blank version
    /// clears the stored one rather than keeping the previous value.
    pub fn upsert_document(
        &self,
        doc_type: Option<&str>,
        content: Option<&str>,
        version: Option<&str>,
    ) -> Result<LegalDocument> {
        let (doc_type, content) = match (
            doc_type.filter(|t| !t.trim().is_empty()),
            content.filter(|c| !c.trim().is_empty()),
        ) {
            (Some(t), Some(c)) => (t, c),
            _ => return Err(Error::Validation("Type and content required".into())),
        };
        let doc_type = parse_doc_type(doc_type)?;
        let version = version.filter(|v| !v.trim().is_empty());

        let doc = self
            .store
            .upsert_legal_doc(doc_type, content, version, Utc::now())?;
        info!(
            "Legal document {} updated (version {})",
            doc_type,
            doc.version.as_deref().unwrap_or("none")
        );
        Ok(doc)
    }
}

fn parse_doc_type(raw: &str) -> Result<LegalDocType> {
    raw.trim().parse().map_err(Error::Validation)
}
