//! Remote verse sources.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

use revelacode_core::{Error, Result};

/// Fetches a JSON document describing a verse from a URL.
pub trait VerseSource: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<serde_json::Value>>;
}

/// HTTP verse source with a fixed timeout and optional `api-key` header.
pub struct HttpVerseSource {
    client: Client,
    api_key: Option<String>,
}

impl HttpVerseSource {
    pub fn new(timeout: Duration, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { client, api_key })
    }
}

impl VerseSource for HttpVerseSource {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<serde_json::Value>> {
        Box::pin(async move {
            debug!("Fetching verse from {}", url);

            let mut request = self.client.get(url).header("Accept", "application/json");
            if let Some(key) = &self.api_key {
                request = request.header("api-key", key);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Error::ExternalFetch(format!("Request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::ExternalFetch(format!("API error {}", status)));
            }

            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| Error::ExternalFetch(format!("Invalid JSON body: {}", e)))
        })
    }
}
