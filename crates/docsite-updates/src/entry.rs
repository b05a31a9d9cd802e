//! Per-document update entries.

use chrono::{DateTime, Utc};
use docsite_content::frontmatter;
use docsite_core::Result;
use futures::future::join_all;

use crate::settings::{DATE_FORMAT, FallbackRecord, UpdatesSettings, parse_date};
use crate::source::DocumentSource;

const NO_TITLE: &str = "未知标题";
const NO_DESCRIPTION: &str = "暂无描述";
const UNKNOWN: &str = "未知";

/// One candidate for the latest-updates panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEntry {
    /// Site-relative document path.
    pub url: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub time: String,
    /// Display date, normally `YYYY-MM-DD`.
    pub last_updated: String,
    /// Sort key: `last_updated` at midnight UTC when it parses, else the
    /// server's modification time.
    pub modified: DateTime<Utc>,
    /// Whether the entry came from a fallback record.
    pub fallback: bool,
}

impl UpdateEntry {
    /// Entry built from front matter, with `modified_at` as the server's
    /// modification time.
    pub fn from_document(url: impl Into<String>, text: &str, modified_at: DateTime<Utc>) -> Self {
        let metadata = frontmatter::extract(text);
        let last_updated = metadata
            .last_updated()
            .map_or_else(|| modified_at.format(DATE_FORMAT).to_string(), str::to_string);
        let modified = metadata
            .last_updated()
            .and_then(parse_date)
            .unwrap_or(modified_at);

        Self {
            url: url.into(),
            title: metadata.title().unwrap_or(NO_TITLE).to_string(),
            description: metadata.description().unwrap_or(NO_DESCRIPTION).to_string(),
            difficulty: metadata.difficulty().unwrap_or(UNKNOWN).to_string(),
            time: metadata.time().unwrap_or(UNKNOWN).to_string(),
            last_updated,
            modified,
            fallback: false,
        }
    }

    pub fn from_fallback(url: impl Into<String>, record: &FallbackRecord) -> Self {
        Self {
            url: url.into(),
            title: record.title.clone(),
            description: record.description.clone(),
            difficulty: record.difficulty.clone(),
            time: record.time.clone(),
            last_updated: record.last_updated.clone(),
            modified: record.modified(),
            fallback: true,
        }
    }
}

/// Fetch one document and describe it.
///
/// Never fails: any fetch error is logged and the document's fallback record
/// is used instead.
pub async fn fetch_entry<S>(source: &S, settings: &UpdatesSettings, path: &str) -> UpdateEntry
where
    S: DocumentSource + ?Sized,
{
    match try_fetch_entry(source, path).await {
        Ok(entry) => entry,
        Err(e) => {
            log::warn!("failed to fetch {path}: {e}; using fallback record");
            UpdateEntry::from_fallback(path, settings.fallback_for(path))
        }
    }
}

async fn try_fetch_entry<S>(source: &S, path: &str) -> Result<UpdateEntry>
where
    S: DocumentSource + ?Sized,
{
    let modified_at = source.last_modified(path).await?.unwrap_or_else(Utc::now);
    let text = source.fetch_text(path).await?;
    Ok(UpdateEntry::from_document(path, &text, modified_at))
}

/// Fetch every path concurrently, preserving input order.
pub async fn collect_entries<S>(
    source: &S,
    settings: &UpdatesSettings,
    paths: &[String],
) -> Vec<UpdateEntry>
where
    S: DocumentSource + ?Sized,
{
    join_all(paths.iter().map(|p| fetch_entry(source, settings, p))).await
}

/// Newest `limit` entries, most recent first. Ties keep input order.
pub fn latest(mut entries: Vec<UpdateEntry>, limit: usize) -> Vec<UpdateEntry> {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    entries.truncate(limit);
    entries
}
