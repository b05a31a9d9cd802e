//! Panel configuration.
//!
//! Everything the panel needs is carried by [`UpdatesSettings`]: where the
//! manifest lives, how links are rewritten, how many cards to show, and the
//! records used when a document cannot be fetched.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Date format used for display and for parsing `last_updated`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of cards.
pub const DEFAULT_LIMIT: usize = 5;

/// A `YYYY-MM-DD` date at midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Description of a document used when it cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRecord {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub time: String,
    /// `YYYY-MM-DD`.
    pub last_updated: String,
}

impl FallbackRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: impl Into<String>,
        time: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty: difficulty.into(),
            time: time.into(),
            last_updated: last_updated.into(),
        }
    }

    /// The record for a document nobody described.
    pub fn unknown_document() -> Self {
        Self::new("未知文档", "暂无描述", "未知", "未知", "2025-11-27")
    }

    /// `last_updated` at midnight UTC; unparseable dates sort last.
    pub fn modified(&self) -> DateTime<Utc> {
        parse_date(&self.last_updated).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Configuration of the latest-updates panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesSettings {
    /// Site-relative path of the JSON manifest.
    pub manifest_path: String,
    /// Prefix joined to every manifest `path`.
    pub content_root: String,
    /// Page that renders markdown documents, linked as `<page>?file=<name>`.
    pub viewer_page: String,
    /// Maximum number of cards.
    pub limit: usize,
    /// Documents to show when the manifest is unusable.
    pub fallback_paths: Vec<String>,
    /// Fallback records keyed by file name.
    pub fallback_records: HashMap<String, FallbackRecord>,
    /// Record for file names missing from `fallback_records`.
    pub unknown_record: FallbackRecord,
}

impl Default for UpdatesSettings {
    fn default() -> Self {
        let fallback_records = HashMap::from([
            (
                "DPapyru-给新人的前言.md".to_string(),
                FallbackRecord::new(
                    "给新人的入门建议",
                    "给新人的入门建议",
                    "初级",
                    "30分钟",
                    "2025-11-27",
                ),
            ),
            (
                "DPapyru-贡献者如何编写文章基础.md".to_string(),
                FallbackRecord::new(
                    "贡献者怎么编写文章？",
                    "用于测试文档查看器功能的示例文档",
                    "中级",
                    "45分钟",
                    "2025-11-27",
                ),
            ),
            (
                "TopicSystem使用指南.md".to_string(),
                FallbackRecord::new(
                    "Topic 系统使用指南",
                    "详细介绍Topic系统的使用方法和最佳实践",
                    "中级",
                    "60分钟",
                    "2025-11-27",
                ),
            ),
            (
                "tutorial-index.md".to_string(),
                FallbackRecord::new(
                    "教程索引",
                    "提供所有教程的概览和导航，帮助用户快速找到所需内容",
                    "全部级别",
                    "15分钟",
                    "2025-11-27",
                ),
            ),
        ]);

        Self {
            manifest_path: "docs/config.json".to_string(),
            content_root: "docs".to_string(),
            viewer_page: "docs/viewer.html".to_string(),
            limit: DEFAULT_LIMIT,
            fallback_paths: vec![
                "docs/Modder入门/DPapyru-给新人的前言.md".to_string(),
                "docs/给贡献者阅读的文章/DPapyru-贡献者如何编写文章基础.md".to_string(),
                "docs/给贡献者阅读的文章/TopicSystem使用指南.md".to_string(),
                "docs/tutorial-index.md".to_string(),
            ],
            fallback_records,
            unknown_record: FallbackRecord::unknown_document(),
        }
    }
}

impl UpdatesSettings {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fallback_paths(mut self, paths: Vec<String>) -> Self {
        self.fallback_paths = paths;
        self
    }

    /// Join a manifest path onto the content root.
    pub fn content_path(&self, path: &str) -> String {
        let root = self.content_root.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if root.is_empty() {
            path.to_string()
        } else {
            format!("{root}/{path}")
        }
    }

    /// Fallback record for a document path, by its file name.
    pub fn fallback_for(&self, path: &str) -> &FallbackRecord {
        self.fallback_records
            .get(file_name(path))
            .unwrap_or(&self.unknown_record)
    }
}

/// Last segment of a `/`-separated path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
