//! Database schema SQL, one table per document collection.

/// Legal documents: at most one row per type.
pub const LEGAL_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS legal_docs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    doc_type TEXT NOT NULL UNIQUE CHECK (doc_type IN ('privacy', 'terms')),
    content TEXT NOT NULL,
    version TEXT,
    last_updated TEXT NOT NULL
);
"#;

/// Verse-level scripture. The composite key is indexed but not unique;
/// the lowest id wins on lookup.
pub const SCRIPTURE_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS scripture_texts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    religion TEXT NOT NULL CHECK (religion IN ('Christianity', 'Islam', 'Hinduism', 'Other')),
    book TEXT NOT NULL,
    chapter INTEGER NOT NULL CHECK (chapter > 0),
    verse INTEGER NOT NULL CHECK (verse > 0),
    version TEXT NOT NULL,
    language TEXT NOT NULL DEFAULT 'en',
    source_type TEXT NOT NULL DEFAULT 'local' CHECK (source_type IN ('local', 'api')),
    text TEXT,
    source_url TEXT,
    meta_json TEXT
);

CREATE INDEX IF NOT EXISTS idx_scripture_key
    ON scripture_texts(religion, book, chapter, verse, version);
"#;

/// Whole multi-faith texts.
pub const MULTI_FAITH_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS multi_faith_texts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text_type TEXT NOT NULL CHECK (text_type IN ('bible', 'quran', 'torah', 'gita')),
    version TEXT NOT NULL,
    language TEXT NOT NULL DEFAULT 'en',
    content TEXT NOT NULL,
    licensed INTEGER NOT NULL DEFAULT 0,
    license_source TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_multi_faith_type ON multi_faith_texts(text_type, version);
"#;
