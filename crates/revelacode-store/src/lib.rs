//! RevelaCode Store — SQLite-backed document collections for legal
//! documents, verse-level scripture, and whole multi-faith texts.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::SqliteStore;
pub use types::*;
