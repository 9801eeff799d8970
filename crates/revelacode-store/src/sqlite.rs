//! SQLite-backed document store.
//!
//! Each entity type lives in its own table and is addressed by exact-match
//! queries, mirroring a document collection: find-one, upsert/save, insert,
//! and delete-all. The connection is shared behind a mutex; every mutating
//! call touches a single row.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::schema::{LEGAL_SCHEMA_SQL, MULTI_FAITH_SCHEMA_SQL, SCRIPTURE_SCHEMA_SQL};
use crate::types::*;
use revelacode_core::{Error, Result};

const VERSE_COLUMNS: &str = "id, religion, book, chapter, verse, version, language, \
                             source_type, text, source_url, meta_json";
const TEXT_COLUMNS: &str = "id, text_type, version, language, content, licensed, \
                            license_source, created_at, updated_at";

/// SQLite document store shared by all services.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open or create the store at `db_path`, creating parent directories.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }

        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;

        let store = Self::with_connection(conn, Some(db_path.to_path_buf()))?;
        let stats = store.get_stats()?;
        info!(
            "SqliteStore initialized: {} legal docs, {} verses, {} texts, path={}",
            stats.legal_documents,
            stats.scripture_verses,
            stats.multi_faith_texts,
            db_path.display()
        );
        Ok(store)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Database(e.to_string()))?;
        Self::with_connection(conn, None)
    }

    fn with_connection(conn: Connection, db_path: Option<PathBuf>) -> Result<Self> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        let full_schema = format!(
            "{}\n{}\n{}",
            LEGAL_SCHEMA_SQL, SCRIPTURE_SCHEMA_SQL, MULTI_FAITH_SCHEMA_SQL
        );
        conn.execute_batch(&full_schema)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Legal documents
    // ---------------------------------------------------------------

    /// Find the legal document of the given type.
    pub fn find_legal_doc(&self, doc_type: LegalDocType) -> Result<Option<LegalDocument>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT doc_type, content, version, last_updated FROM legal_docs WHERE doc_type = ?1",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let doc = stmt
            .query_row(params![doc_type.as_str()], Self::row_to_legal_doc)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(doc)
    }

    /// Create or replace the legal document keyed on its type.
    pub fn upsert_legal_doc(
        &self,
        doc_type: LegalDocType,
        content: &str,
        version: Option<&str>,
        last_updated: DateTime<Utc>,
    ) -> Result<LegalDocument> {
        let conn = self.conn.lock();
        let doc = conn
            .prepare_cached(
                "INSERT INTO legal_docs (doc_type, content, version, last_updated)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(doc_type) DO UPDATE SET
                     content = excluded.content,
                     version = excluded.version,
                     last_updated = excluded.last_updated
                 RETURNING doc_type, content, version, last_updated",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(
                params![doc_type.as_str(), content, version, last_updated],
                Self::row_to_legal_doc,
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        debug!("Upserted legal document {}", doc_type);
        Ok(doc)
    }

    /// Delete every legal document. Returns the number removed.
    pub fn delete_all_legal_docs(&self) -> Result<usize> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM legal_docs", [])
            .map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Scripture verses
    // ---------------------------------------------------------------

    /// Insert a verse. Returns the new row ID.
    pub fn insert_verse(&self, verse: &NewScriptureVerse) -> Result<i64> {
        let meta_json = verse.meta.as_ref().map(serde_json::to_string).transpose()?;

        let conn = self.conn.lock();
        let id = conn
            .prepare_cached(
                "INSERT INTO scripture_texts
                 (religion, book, chapter, verse, version, language, source_type, text, source_url, meta_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![
                verse.key.religion.as_str(),
                verse.key.book,
                verse.key.chapter,
                verse.key.verse,
                verse.key.version,
                verse.language,
                verse.source_type.as_str(),
                verse.text,
                verse.source_url,
                meta_json,
            ])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(id)
    }

    /// Find the first verse matching the composite key.
    pub fn find_verse(&self, key: &VerseKey) -> Result<Option<ScriptureVerse>> {
        let conn = self.conn.lock();
        let sql = format!(
            "SELECT {} FROM scripture_texts
             WHERE religion = ?1 AND book = ?2 AND chapter = ?3 AND verse = ?4 AND version = ?5
             ORDER BY id ASC LIMIT 1",
            VERSE_COLUMNS
        );
        let mut stmt = conn
            .prepare_cached(&sql)
            .map_err(|e| Error::Database(e.to_string()))?;
        let verse = stmt
            .query_row(
                params![
                    key.religion.as_str(),
                    key.book,
                    key.chapter,
                    key.verse,
                    key.version
                ],
                Self::row_to_verse,
            )
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(verse)
    }

    /// Store fetched text on a verse and mark it local.
    pub fn cache_verse_text(&self, verse_id: i64, text: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let count = conn
            .execute(
                "UPDATE scripture_texts SET text = ?1, source_type = 'local' WHERE id = ?2",
                params![text, verse_id],
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Delete every verse. Returns the number removed.
    pub fn delete_all_verses(&self) -> Result<usize> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM scripture_texts", [])
            .map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Multi-faith texts
    // ---------------------------------------------------------------

    /// Insert a whole text. Returns the new row ID.
    pub fn insert_text(&self, text: &NewMultiFaithText) -> Result<i64> {
        let now = Utc::now();
        let conn = self.conn.lock();
        let id = conn
            .prepare_cached(
                "INSERT INTO multi_faith_texts
                 (text_type, version, language, content, licensed, license_source, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![
                text.text_type.as_str(),
                text.version,
                text.language,
                text.content,
                text.licensed,
                text.license_source,
                now,
            ])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(id)
    }

    /// Find a text by type and, when given, version. Oldest entry wins.
    pub fn find_text(
        &self,
        text_type: TextType,
        version: Option<&str>,
    ) -> Result<Option<MultiFaithText>> {
        let conn = self.conn.lock();
        let sql = format!(
            "SELECT {} FROM multi_faith_texts
             WHERE text_type = ?1 AND (?2 IS NULL OR version = ?2)
             ORDER BY id ASC LIMIT 1",
            TEXT_COLUMNS
        );
        let mut stmt = conn
            .prepare_cached(&sql)
            .map_err(|e| Error::Database(e.to_string()))?;
        let text = stmt
            .query_row(params![text_type.as_str(), version], Self::row_to_text)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(text)
    }

    /// List all texts without their content.
    pub fn list_texts(&self) -> Result<Vec<TextSummary>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, text_type, version, language, licensed, license_source
                 FROM multi_faith_texts ORDER BY text_type, version, id",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TextSummary {
                    id: row.get(0)?,
                    text_type: parse_column(row, 1)?,
                    version: row.get(2)?,
                    language: row.get(3)?,
                    licensed: row.get(4)?,
                    license_source: row.get(5)?,
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete every whole text. Returns the number removed.
    pub fn delete_all_texts(&self) -> Result<usize> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM multi_faith_texts", [])
            .map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Stats
    // ---------------------------------------------------------------

    pub fn get_stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock();
        let count = |table: &str| -> Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(|e| Error::Database(e.to_string()))
        };

        Ok(StoreStats {
            legal_documents: count("legal_docs")?,
            scripture_verses: count("scripture_texts")?,
            multi_faith_texts: count("multi_faith_texts")?,
            db_path: self
                .db_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".to_string()),
        })
    }

    // ---------------------------------------------------------------
    // Row mapping
    // ---------------------------------------------------------------

    fn row_to_legal_doc(row: &rusqlite::Row<'_>) -> rusqlite::Result<LegalDocument> {
        Ok(LegalDocument {
            doc_type: parse_column(row, 0)?,
            content: row.get(1)?,
            version: row.get(2)?,
            last_updated: row.get(3)?,
        })
    }

    fn row_to_verse(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScriptureVerse> {
        let meta = match row.get::<_, Option<String>>(10)? {
            Some(raw) => Some(serde_json::from_str(&raw).map_err(|e| {
                warn!("Unreadable meta on verse row: {}", e);
                rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
            })?),
            None => None,
        };
        Ok(ScriptureVerse {
            id: row.get(0)?,
            religion: parse_column(row, 1)?,
            book: row.get(2)?,
            chapter: row.get(3)?,
            verse: row.get(4)?,
            version: row.get(5)?,
            language: row.get(6)?,
            source_type: parse_column(row, 7)?,
            text: row.get(8)?,
            source_url: row.get(9)?,
            meta,
        })
    }

    fn row_to_text(row: &rusqlite::Row<'_>) -> rusqlite::Result<MultiFaithText> {
        Ok(MultiFaithText {
            id: row.get(0)?,
            text_type: parse_column(row, 1)?,
            version: row.get(2)?,
            language: row.get(3)?,
            content: row.get(4)?,
            licensed: row.get(5)?,
            license_source: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}

/// Read a TEXT column into one of the string-backed enums.
fn parse_column<T>(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}
