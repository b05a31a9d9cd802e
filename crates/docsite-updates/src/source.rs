//! Document sources.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docsite_core::{Error, Result};
use reqwest::header::LAST_MODIFIED;
use reqwest::Url;

/// Where the panel reads documents from.
///
/// Paths are site-relative, e.g. `docs/tutorial-index.md`.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the full text of a document.
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Ask for a document's modification time without fetching the body.
    ///
    /// `Ok(None)` means the document exists but reported no usable time.
    async fn last_modified(&self, path: &str) -> Result<Option<DateTime<Utc>>>;
}

/// Source backed by a live site over HTTP.
pub struct HttpSource {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a source whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| Error::config(format!("invalid base URL '{base_url}': {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::invalid_data(format!("invalid document path '{path}': {e}")))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.url(path)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::http(format!("GET {url}: {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(format!("GET {url}: reading body: {e}")))
    }

    async fn last_modified(&self, path: &str) -> Result<Option<DateTime<Utc>>> {
        let url = self.url(path)?;
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("HEAD {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::http(format!("HEAD {url}: {}", response.status())));
        }

        Ok(response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_http_date))
    }
}

/// Parse an HTTP date such as `Wed, 21 Oct 2015 07:28:00 GMT`.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
