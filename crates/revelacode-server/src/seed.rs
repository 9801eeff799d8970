//! Bootstrap data — resets the store and seeds legal documents, example
//! verses, and example whole texts.

use chrono::Utc;
use tracing::info;

use revelacode_core::Result;
use revelacode_store::{
    LegalDocType, NewMultiFaithText, NewScriptureVerse, Religion, SqliteStore, TextType,
    VerseKey,
};

pub const PRIVACY_POLICY: &str = "## Privacy Policy

Effective Date: July 25, 2025

At RevelaCode, your privacy is important to us. This Privacy Policy explains how we collect, use, and protect your personal data when you use our platform.

**Information We Collect**
- Account details (e.g., email, linked social media)
- Usage data (e.g., logs, device info)
- Any data you choose to share (e.g., saved decodes)

**How We Use Your Data**
- To provide and improve the RevelaCode experience
- To personalize content based on your preferences
- For security, support, and analytics

**Data Sharing**
We do **not** sell your data. We may share data only with trusted partners who help us operate RevelaCode, subject to strict confidentiality.

**Your Rights**
- Access, update, or delete your data at any time
- Withdraw consent for processing

**Contact**
For questions, contact us at: support@revelacode.com";

pub const TERMS_OF_SERVICE: &str = "## Terms of Service

Effective Date: July 25, 2025

Welcome to RevelaCode! By using our platform, you agree to these Terms.

**1. Use of Service**
- You must be at least 13 years old
- Do not misuse RevelaCode (e.g., hacking, spamming, scraping)

**2. Content**
- You retain ownership of your decodes and notes
- RevelaCode may use anonymized data to improve the service

**3. Account**
- Keep your credentials confidential
- You are responsible for activity under your account

**4. Termination**
We may suspend or terminate your access if you violate these Terms.

**5. Disclaimer**
RevelaCode is provided \u{201c}as is\u{201d} without warranties. We are not liable for any indirect damages.

**Contact**
Questions? Email support@revelacode.com";

const LEGAL_VERSION: &str = "1.0";

/// Counts of seeded rows.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub removed: usize,
    pub legal_documents: usize,
    pub verses: usize,
    pub texts: usize,
}

/// Clear every collection and insert the fixed bootstrap data.
pub fn seed_store(store: &SqliteStore) -> Result<SeedReport> {
    let mut report = SeedReport {
        removed: store.delete_all_legal_docs()?
            + store.delete_all_verses()?
            + store.delete_all_texts()?,
        ..Default::default()
    };

    for (doc_type, content) in [
        (LegalDocType::Privacy, PRIVACY_POLICY),
        (LegalDocType::Terms, TERMS_OF_SERVICE),
    ] {
        store.upsert_legal_doc(doc_type, content, Some(LEGAL_VERSION), Utc::now())?;
        report.legal_documents += 1;
    }

    for verse in seed_verses() {
        store.insert_verse(&verse)?;
        report.verses += 1;
    }

    for text in seed_texts() {
        store.insert_text(&text)?;
        report.texts += 1;
    }

    info!(
        "Seeded {} legal documents, {} verses, {} texts ({} rows removed)",
        report.legal_documents, report.verses, report.texts, report.removed
    );
    Ok(report)
}

fn key(religion: Religion, book: &str, chapter: u32, verse: u32, version: &str) -> VerseKey {
    VerseKey {
        religion,
        book: book.into(),
        chapter,
        verse,
        version: version.into(),
    }
}

pub fn seed_verses() -> Vec<NewScriptureVerse> {
    vec![
        NewScriptureVerse::local(
            key(Religion::Christianity, "John", 3, 16, "KJV"),
            "For God so loved the world...",
        ),
        NewScriptureVerse::api(
            key(Religion::Christianity, "John", 3, 16, "NIV"),
            "https://api.scripture.api.bible/v1/bibles/{BIBLE_ID}/verses/JHN.3.16",
        ),
        NewScriptureVerse::local(
            key(Religion::Islam, "Al-Baqarah", 2, 255, "Sahih"),
            "Allah! There is no deity except Him, the Ever-Living...",
        ),
        NewScriptureVerse::api(
            key(Religion::Hinduism, "Bhagavad Gita", 2, 47, "EN"),
            "https://bhagavadgitaapi.in/slok/2/47",
        ),
    ]
}

pub fn seed_texts() -> Vec<NewMultiFaithText> {
    vec![
        NewMultiFaithText {
            text_type: TextType::Bible,
            version: "KJV".into(),
            language: "en".into(),
            content: "In the beginning God created the heaven and the earth.".into(),
            licensed: false,
            license_source: Some("Public domain".into()),
        },
        NewMultiFaithText {
            text_type: TextType::Bible,
            version: "WEB".into(),
            language: "en".into(),
            content: "In the beginning, God created the heavens and the earth.".into(),
            licensed: false,
            license_source: Some("Public domain".into()),
        },
    ]
}

pub fn print_report(report: &SeedReport) {
    println!("=== RevelaCode Seed Report ===");
    println!();
    println!("Rows removed:       {}", report.removed);
    println!("Legal documents:    {}", report.legal_documents);
    println!("Scripture verses:   {}", report.verses);
    println!("Multi-faith texts:  {}", report.texts);
}
