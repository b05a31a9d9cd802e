//! In-memory document source for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docsite_core::{Error, Result};
use tokio::sync::Mutex;

use crate::source::DocumentSource;

/// Source that serves canned documents.
///
/// Paths that were never added behave like a 404. Every call is recorded so
/// tests can check what was requested.
#[derive(Clone, Default)]
pub struct MockSource {
    documents: Arc<HashMap<String, MockDocument>>,
    requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct MockDocument {
    body: String,
    last_modified: Option<DateTime<Utc>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsite_updates::MockSource;
    ///
    /// let source = MockSource::new()
    ///     .with_document("docs/a.md", "---\ntitle: A\n---\n", None);
    /// ```
    pub fn with_document(
        mut self,
        path: impl Into<String>,
        body: impl Into<String>,
        last_modified: Option<DateTime<Utc>>,
    ) -> Self {
        Arc::make_mut(&mut self.documents).insert(
            path.into(),
            MockDocument {
                body: body.into(),
                last_modified,
            },
        );
        self
    }

    /// Paths requested so far, in call order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    async fn lookup(&self, path: &str) -> Result<&MockDocument> {
        self.requests.lock().await.push(path.to_string());
        self.documents
            .get(path)
            .ok_or_else(|| Error::http(format!("{path}: 404 Not Found")))
    }
}

#[async_trait]
impl DocumentSource for MockSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        Ok(self.lookup(path).await?.body.clone())
    }

    async fn last_modified(&self, path: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.lookup(path).await?.last_modified)
    }
}
