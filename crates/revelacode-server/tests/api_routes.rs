//! Route tests — drive the full router against an in-memory store and a
//! counting verse source, and check status codes and the response shapes
//! the frontends read.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tower::ServiceExt;

use revelacode_core::{RevelaConfig, Result};
use revelacode_scripture::VerseSource;
use revelacode_server::{build_router, seed, AppState};
use revelacode_store::SqliteStore;

struct CountingSource {
    body: Value,
    calls: AtomicUsize,
}

impl VerseSource for CountingSource {
    fn fetch<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = self.body.clone();
        Box::pin(async move { Ok(body) })
    }
}

struct TestApp {
    router: Router,
    source: Arc<CountingSource>,
}

impl TestApp {
    fn new(vars: &[(&str, &str)]) -> Self {
        Self::build(vars, true)
    }

    fn unseeded() -> Self {
        Self::build(&[], false)
    }

    fn build(vars: &[(&str, &str)], seeded: bool) -> Self {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = RevelaConfig::from_lookup(|key| {
            vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap();

        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        if seeded {
            seed::seed_store(&store).unwrap();
        }

        let source = Arc::new(CountingSource {
            body: json!({ "data": { "content": "X" } }),
            calls: AtomicUsize::new(0),
        });
        let state = Arc::new(AppState::new(config, store, source.clone()));
        Self {
            router: build_router(state),
            source,
        }
    }

    fn calls(&self) -> usize {
        self.source.calls.load(Ordering::SeqCst)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(post_request(uri, body.to_string(), None)).await
    }
}

fn post_request(uri: &str, body: String, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

// ---------------------------------------------------------------
// Legal
// ---------------------------------------------------------------

#[tokio::test]
async fn test_get_seeded_legal_doc() {
    let app = TestApp::new(&[]);
    let (status, body) = app.get("/api/legal/terms").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "terms");
    assert!(body["content"].as_str().unwrap().starts_with("## Terms of Service"));
    assert_eq!(body["version"], "1.0");
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn test_update_then_get_privacy() {
    let app = TestApp::new(&[]);
    let (status, body) = app
        .post(
            "/api/legal/update",
            json!({ "type": "privacy", "content": "v2", "version": "1.1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Document updated");
    assert_eq!(body["doc"]["content"], "v2");

    let (status, body) = app.get("/api/legal/privacy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "v2");
    assert_eq!(body["version"], "1.1");
}

#[tokio::test]
async fn test_legal_errors() {
    let app = TestApp::new(&[]);

    let (status, body) = app.get("/api/legal/cookies").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = app
        .post("/api/legal/update", json!({ "type": "terms" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Type and content required");

    let (status, _) = app
        .send(post_request("/api/legal/update", "{not json".into(), None))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/legal/terms").await;
    assert!(body["content"].as_str().unwrap().starts_with("## Terms of Service"));
}

#[tokio::test]
async fn test_update_without_version_clears_it() {
    let app = TestApp::new(&[]);
    let (status, body) = app
        .post(
            "/api/legal/update",
            json!({ "type": "privacy", "content": "new" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["doc"]["version"].is_null());

    let (_, body) = app.get("/api/legal/privacy").await;
    assert_eq!(body["content"], "new");
    assert!(body["version"].is_null());
}

#[tokio::test]
async fn test_unseeded_legal_doc_is_404() {
    let app = TestApp::unseeded();
    let (status, body) = app.get("/api/legal/privacy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Document not found");
}

#[tokio::test]
async fn test_admin_token_guards_update() {
    let app = TestApp::new(&[("REVELACODE_ADMIN_TOKEN", "s3cret")]);
    let body = json!({ "type": "terms", "content": "new terms" }).to_string();

    let (status, resp) = app
        .send(post_request("/api/legal/update", body.clone(), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["message"], "Unauthorized");

    let (status, _) = app
        .send(post_request("/api/legal/update", body.clone(), Some("wrong")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(post_request("/api/legal/update", body, Some("s3cret")))
        .await;
    assert_eq!(status, StatusCode::OK);

    // Reads stay public.
    let (status, resp) = app.get("/api/legal/terms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["content"], "new terms");
}

// ---------------------------------------------------------------
// Verses
// ---------------------------------------------------------------

#[tokio::test]
async fn test_local_verse() {
    let app = TestApp::new(&[]);
    let (status, body) = app
        .post(
            "/api/verse",
            json!({
                "religion": "Christianity",
                "book": "John",
                "chapter": 3,
                "verse": 16,
                "version": "KJV",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "For God so loved the world...");
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn test_api_verse_cache_fill() {
    let app = TestApp::new(&[]);
    let request = json!({
        "religion": "Christianity",
        "book": "John",
        "chapter": 3,
        "verse": 16,
        "version": "NIV",
    });

    for _ in 0..2 {
        let (status, body) = app.post("/api/verse", request.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "X");
    }
    assert_eq!(app.calls(), 1);
}

#[tokio::test]
async fn test_verse_errors() {
    let app = TestApp::new(&[]);

    let (status, body) = app
        .post(
            "/api/verse",
            json!({
                "religion": "Islam",
                "book": "Al-Fatiha",
                "chapter": 1,
                "verse": 1,
                "version": "Sahih",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Verse not found");

    let (status, _) = app
        .post(
            "/api/verse",
            json!({
                "religion": "Zoroastrianism",
                "book": "Yasna",
                "chapter": 1,
                "verse": 1,
                "version": "EN",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/verse", json!({ "religion": "Christianity" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn test_string_chapter_is_rejected() {
    let app = TestApp::new(&[]);
    let (status, body) = app
        .post(
            "/api/verse",
            json!({
                "religion": "Christianity",
                "book": "John",
                "chapter": "3",
                "verse": "16",
                "version": "KJV",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

// ---------------------------------------------------------------
// Static data, texts, health
// ---------------------------------------------------------------

#[tokio::test]
async fn test_symbols_and_prophecies_shape() {
    let app = TestApp::new(&[]);

    let (status, symbols) = app.get("/api/symbols").await;
    assert_eq!(status, StatusCode::OK);
    let symbols = symbols.as_array().unwrap();
    assert!(!symbols.is_empty());
    for s in symbols {
        assert!(s["symbol"].is_string());
        assert!(s["meaning"].is_string());
    }

    let (status, prophecies) = app.get("/api/prophecies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prophecies[0]["id"], "1");
    assert_eq!(prophecies[0]["verse"], "Isaiah 53:5");
    assert_eq!(prophecies[1]["verse"], "Joel 2:28");
}

#[tokio::test]
async fn test_texts_routes() {
    let app = TestApp::new(&[]);

    let (status, listed) = app.get("/api/texts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert!(listed[0].get("content").is_none());

    let (status, text) = app.get("/api/texts/bible?version=WEB").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text["type"], "bible");
    assert_eq!(text["version"], "WEB");
    assert_eq!(text["licensed"], false);

    let (status, _) = app.get("/api/texts/torah").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/texts/vedas").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bad_text_query_returns_json_message() {
    let app = TestApp::new(&[]);
    let (status, body) = app.get("/api/texts/bible?version=a&version=b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid query string"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new(&[]);
    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["legalDocuments"], 2);
    assert_eq!(body["scriptureVerses"], 4);
}
