//! Verse text extraction from remote response bodies.
//!
//! Known APIs wrap the verse differently. Strategies are tried in order and
//! the first one yielding non-empty text wins.

use serde_json::Value;

/// Pulls verse text out of a response body, if this shape matches.
pub type ExtractionStrategy = fn(&Value) -> Option<String>;

/// Ordered extraction strategies, named by the path they read.
pub const EXTRACTION_STRATEGIES: &[(&str, ExtractionStrategy)] = &[
    ("data.content", nested_data_content),
    ("text", top_level_text),
];

/// Run the strategies in order. Returns the matching path and the text.
pub fn extract_text(body: &Value) -> Option<(&'static str, String)> {
    EXTRACTION_STRATEGIES
        .iter()
        .find_map(|(path, strategy)| strategy(body).map(|text| (*path, text)))
}

/// `{ "data": { "content": "..." } }`, as returned by api.bible.
fn nested_data_content(body: &Value) -> Option<String> {
    non_empty_str(body.pointer("/data/content"))
}

/// `{ "text": "..." }`
fn top_level_text(body: &Value) -> Option<String> {
    non_empty_str(body.get("text"))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_content_wins_over_text() {
        let body = json!({ "data": { "content": "X" }, "text": "Y" });
        assert_eq!(extract_text(&body), Some(("data.content", "X".to_string())));
    }

    #[test]
    fn test_falls_back_to_top_level_text() {
        let body = json!({ "data": { "content": "" }, "text": "Y" });
        assert_eq!(extract_text(&body), Some(("text", "Y".to_string())));

        let body = json!({ "text": "Y" });
        assert_eq!(extract_text(&body).map(|(_, t)| t), Some("Y".to_string()));
    }

    #[test]
    fn test_unrecognized_shapes_yield_nothing() {
        assert_eq!(extract_text(&json!({ "data": "flat" })), None);
        assert_eq!(extract_text(&json!({ "text": 42 })), None);
        assert_eq!(extract_text(&json!([])), None);
    }
}
