//! Verse resolution: local text first, remote source with write-back second.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::extract::extract_text;
use crate::source::VerseSource;
use revelacode_core::{Error, Result};
use revelacode_store::{ScriptureVerse, SourceType, SqliteStore, VerseKey};

pub struct VerseResolver {
    store: Arc<SqliteStore>,
    source: Arc<dyn VerseSource>,
}

impl VerseResolver {
    pub fn new(store: Arc<SqliteStore>, source: Arc<dyn VerseSource>) -> Self {
        Self { store, source }
    }

    /// Resolve the text of the verse identified by `key`.
    ///
    /// Local verses return their stored text without touching the network.
    /// Remote verses are fetched once; the text is written back and the verse
    /// flipped to local, so concurrent misses at worst fetch twice.
    pub async fn resolve_verse(&self, key: &VerseKey) -> Result<String> {
        validate_key(key)?;

        let verse = self
            .store
            .find_verse(key)?
            .ok_or_else(|| Error::NotFound("Verse not found".into()))?;

        match verse.source_type {
            SourceType::Local => {
                if let Some(text) = verse.text.as_deref().filter(|t| !t.is_empty()) {
                    debug!("Verse {} served locally", key);
                    return Ok(text.to_string());
                }
            }
            SourceType::Api => {
                if let Some(url) = verse.source_url.as_deref().filter(|u| !u.is_empty()) {
                    return self.fetch_and_cache(&verse, url).await;
                }
            }
        }

        warn!(
            "Verse {} (id {}) has source type {} but no usable text or URL",
            key,
            verse.id,
            verse.source_type.as_str()
        );
        Err(Error::InvalidConfiguration("Invalid verse config".into()))
    }

    async fn fetch_and_cache(&self, verse: &ScriptureVerse, url: &str) -> Result<String> {
        let body = self.source.fetch(url).await.map_err(|e| {
            warn!("Error fetching verse {} from {}: {}", verse.id, url, e);
            if matches!(e, Error::ExternalFetch(_)) {
                e
            } else {
                Error::ExternalFetch(e.to_string())
            }
        })?;

        let (path, text) = extract_text(&body).ok_or_else(|| {
            warn!("No verse text in response from {}", url);
            Error::ExternalFetch(format!("No verse text in response from {}", url))
        })?;

        self.store.cache_verse_text(verse.id, &text)?;
        info!("Cached verse {} from {} ({})", verse.id, url, path);
        Ok(text)
    }
}

fn validate_key(key: &VerseKey) -> Result<()> {
    if key.book.trim().is_empty() || key.version.trim().is_empty() {
        return Err(Error::Validation("Book and version required".into()));
    }
    if key.chapter == 0 || key.verse == 0 {
        return Err(Error::Validation(
            "Chapter and verse must be positive".into(),
        ));
    }
    Ok(())
}
