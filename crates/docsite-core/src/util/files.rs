//! Async file utilities for docsite.
//!
//! Provides the file discovery and reading operations used by the index
//! builder and the CLI.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Options for discovering files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<&'static str>,
    /// Maximum directory depth to search (None = unlimited)
    pub max_depth: Option<usize>,
}

impl FindOptions {
    /// Create options for finding markdown files.
    pub fn markdown() -> Self {
        Self {
            extension: Some("md"),
            max_depth: None,
        }
    }

    /// Set maximum search depth.
    ///
    /// A file directly inside the base directory has depth 1.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

impl FileInfo {
    /// Relative path rendered with `/` separators, suitable for links.
    pub fn link_path(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Find all files matching criteria in a directory.
///
/// Results are sorted by relative path so callers get the same order on
/// every run regardless of how the filesystem enumerates entries.
///
/// # Example
///
/// ```no_run
/// # use docsite_core::util::files::{find_all_files, FindOptions};
/// # use std::path::Path;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let files = find_all_files(
///     Path::new("docs"),
///     FindOptions::markdown().with_max_depth(1)
/// ).await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result
            .map_err(|e| Error::io_with_path(std::io::Error::other(e.to_string()), base_path))?;
        let path = entry.path();

        // Skip directories
        if path.is_dir() {
            continue;
        }

        // Check depth limit
        if let Some(max_depth) = options.max_depth {
            let depth = path
                .strip_prefix(base_path)
                .map(|p| p.components().count())
                .unwrap_or(0);
            if depth > max_depth {
                continue;
            }
        }

        // Check extension if specified
        if let Some(ext) = options.extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        files.push(FileInfo {
            path: path.to_path_buf(),
            stem,
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    log::debug!("found {} file(s) under {}", files.len(), base_path.display());
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Replace a file's contents in full.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
