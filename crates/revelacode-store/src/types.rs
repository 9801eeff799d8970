//! Entity types stored in the document collections.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of legal document. At most one document exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalDocType {
    Privacy,
    Terms,
}

impl LegalDocType {
    pub const ALL: [LegalDocType; 2] = [LegalDocType::Privacy, LegalDocType::Terms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Terms => "terms",
        }
    }
}

impl fmt::Display for LegalDocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalDocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy" => Ok(Self::Privacy),
            "terms" => Ok(Self::Terms),
            other => Err(format!("Unknown legal document type: {}", other)),
        }
    }
}

/// A legal document row (privacy policy or terms of service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    #[serde(rename = "type")]
    pub doc_type: LegalDocType,
    pub content: String,
    pub last_updated: DateTime<Utc>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Religion {
    Christianity,
    Islam,
    Hinduism,
    Other,
}

impl Religion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Christianity => "Christianity",
            Self::Islam => "Islam",
            Self::Hinduism => "Hinduism",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Religion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Christianity" => Ok(Self::Christianity),
            "Islam" => Ok(Self::Islam),
            "Hinduism" => Ok(Self::Hinduism),
            "Other" => Ok(Self::Other),
            other => Err(format!("Unknown religion: {}", other)),
        }
    }
}

/// Where a verse's text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Local,
    Api,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Api => "api",
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "api" => Ok(Self::Api),
            other => Err(format!("Unknown source type: {}", other)),
        }
    }
}

/// Optional annotation attached to a verse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Composite lookup key for a verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseKey {
    pub religion: Religion,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub version: String,
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{} ({})",
            self.religion.as_str(),
            self.book,
            self.chapter,
            self.verse,
            self.version
        )
    }
}

/// A verse row from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureVerse {
    pub id: i64,
    pub religion: Religion,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub version: String,
    pub language: String,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<VerseMeta>,
}

impl ScriptureVerse {
    pub fn key(&self) -> VerseKey {
        VerseKey {
            religion: self.religion,
            book: self.book.clone(),
            chapter: self.chapter,
            verse: self.verse,
            version: self.version.clone(),
        }
    }
}

/// Input for inserting a verse.
#[derive(Debug, Clone)]
pub struct NewScriptureVerse {
    pub key: VerseKey,
    pub language: String,
    pub source_type: SourceType,
    pub text: Option<String>,
    pub source_url: Option<String>,
    pub meta: Option<VerseMeta>,
}

impl NewScriptureVerse {
    /// A verse whose text is stored locally.
    pub fn local(key: VerseKey, text: impl Into<String>) -> Self {
        Self {
            key,
            language: "en".into(),
            source_type: SourceType::Local,
            text: Some(text.into()),
            source_url: None,
            meta: None,
        }
    }

    /// A verse whose text is fetched from `source_url` on first lookup.
    pub fn api(key: VerseKey, source_url: impl Into<String>) -> Self {
        Self {
            key,
            language: "en".into(),
            source_type: SourceType::Api,
            text: None,
            source_url: Some(source_url.into()),
            meta: None,
        }
    }
}

/// Whole-text scripture kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Bible,
    Quran,
    Torah,
    Gita,
}

impl TextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bible => "bible",
            Self::Quran => "quran",
            Self::Torah => "torah",
            Self::Gita => "gita",
        }
    }
}

impl FromStr for TextType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bible" => Ok(Self::Bible),
            "quran" => Ok(Self::Quran),
            "torah" => Ok(Self::Torah),
            "gita" => Ok(Self::Gita),
            other => Err(format!("Unknown text type: {}", other)),
        }
    }
}

/// A whole scripture text in one version and language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFaithText {
    pub id: i64,
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub version: String,
    pub language: String,
    pub content: String,
    pub licensed: bool,
    pub license_source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored text without its content, for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSummary {
    pub id: i64,
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub version: String,
    pub language: String,
    pub licensed: bool,
    pub license_source: Option<String>,
}

/// Input for inserting a whole text.
#[derive(Debug, Clone)]
pub struct NewMultiFaithText {
    pub text_type: TextType,
    pub version: String,
    pub language: String,
    pub content: String,
    pub licensed: bool,
    pub license_source: Option<String>,
}

/// Row counts per collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub legal_documents: i64,
    pub scripture_verses: i64,
    pub multi_faith_texts: i64,
    pub db_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_document_json_shape() {
        let doc = LegalDocument {
            doc_type: LegalDocType::Privacy,
            content: "## Privacy".into(),
            last_updated: Utc::now(),
            version: Some("1.0".into()),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "privacy");
        assert_eq!(json["content"], "## Privacy");
        assert_eq!(json["version"], "1.0");
        assert!(json["lastUpdated"].is_string());
    }

    #[test]
    fn test_verse_key_deserializes_from_request_body() {
        let key: VerseKey = serde_json::from_value(serde_json::json!({
            "religion": "Christianity",
            "book": "John",
            "chapter": 3,
            "verse": 16,
            "version": "KJV",
        }))
        .unwrap();
        assert_eq!(key.religion, Religion::Christianity);
        assert_eq!(key.to_string(), "Christianity John 3:16 (KJV)");
    }

    #[test]
    fn test_enum_parsing_rejects_unknown_values() {
        assert_eq!("terms".parse::<LegalDocType>(), Ok(LegalDocType::Terms));
        assert!("cookies".parse::<LegalDocType>().is_err());
        assert!("christianity".parse::<Religion>().is_err());
        assert_eq!("api".parse::<SourceType>(), Ok(SourceType::Api));
        assert_eq!("gita".parse::<TextType>(), Ok(TextType::Gita));
    }
}
