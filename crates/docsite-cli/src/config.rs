//! Configuration for the `docsite` command.
//!
//! [`DocsiteConfig`] loads from a TOML file, environment variables, and
//! defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `DOCSITE_CONFIG` environment variable
//! 3. XDG default: `~/.config/docsite/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use confyg::{Confygery, env};
use docsite_content::IndexOptions;
use docsite_content::index::DEFAULT_OUTPUT_FILE;
use docsite_core::{Error, Result};
use docsite_updates::UpdatesSettings;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "DOCSITE";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for `docsite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiteConfig {
    /// Tutorial index generation.
    pub index: IndexConfig,

    /// Latest-updates panel.
    pub updates: UpdatesConfig,
}

/// Tutorial index configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory holding the markdown documents.
    pub content_dir: String,

    /// Index file name, relative to `content_dir`.
    pub output_file: String,

    /// Directory levels to scan; `0` scans every level.
    pub max_depth: usize,
}

/// Latest-updates panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatesConfig {
    /// Base URL of the site serving the documents.
    pub base_url: String,

    /// Site-relative path of the document manifest.
    pub manifest_path: String,

    /// Prefix for manifest paths.
    pub content_root: String,

    /// Page that renders markdown documents.
    pub viewer_page: String,

    /// Number of cards to show.
    pub limit: usize,

    /// Per-request timeout in seconds; `0` disables it.
    pub timeout_secs: u64,

    /// File to write the panel HTML to; stdout when unset.
    pub output: Option<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            content_dir: "docs".to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            max_depth: 1,
        }
    }
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        let settings = UpdatesSettings::default();
        Self {
            base_url: "http://localhost:8080".to_string(),
            manifest_path: settings.manifest_path,
            content_root: settings.content_root,
            viewer_page: settings.viewer_page,
            limit: settings.limit,
            timeout_secs: 10,
            output: None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl IndexConfig {
    /// Index builder options, with an optional content directory override.
    pub fn to_options(&self, content_dir: Option<&str>) -> IndexOptions {
        let dir = content_dir.unwrap_or(&self.content_dir);
        let depth = (self.max_depth > 0).then_some(self.max_depth);
        IndexOptions::new(docsite_core::util::paths::expand_tilde(dir))
            .with_output_file(self.output_file.clone())
            .with_max_depth(depth)
    }
}

impl UpdatesConfig {
    /// Panel settings; fallback documents keep their built-in values.
    pub fn to_settings(&self) -> UpdatesSettings {
        UpdatesSettings {
            manifest_path: self.manifest_path.clone(),
            content_root: self.content_root.clone(),
            viewer_page: self.viewer_page.clone(),
            limit: self.limit,
            ..UpdatesSettings::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl DocsiteConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("index");
        env_opts.add_section("updates");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("DOCSITE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("docsite").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `DOCSITE_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = DocsiteConfig::default();
        assert_eq!(config.index.content_dir, "docs");
        assert_eq!(config.index.output_file, "tutorial-index.md");
        assert_eq!(config.index.max_depth, 1);
        assert_eq!(config.updates.manifest_path, "docs/config.json");
        assert_eq!(config.updates.limit, 5);
        assert!(config.updates.output.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [index]
            content_dir = "site/docs"
            max_depth = 0

            [updates]
            base_url = "https://example.org"
            limit = 3
            output = "updates.html"
        "#;

        let config: DocsiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.index.content_dir, "site/docs");
        assert_eq!(config.index.output_file, "tutorial-index.md");
        assert_eq!(config.index.max_depth, 0);
        assert_eq!(config.updates.base_url, "https://example.org");
        assert_eq!(config.updates.limit, 3);
        assert_eq!(config.updates.output.as_deref(), Some("updates.html"));
        assert_eq!(config.updates.viewer_page, "docs/viewer.html");
    }

    #[test]
    fn test_config_to_toml() {
        let config = DocsiteConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("[index]"));
        assert!(toml_str.contains("[updates]"));
        assert!(toml_str.contains("limit = 5"));

        let parsed: DocsiteConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [index]
                output_file = "index.md"
                [updates]
                base_url = "http://docs.local"
            "#,
        )
        .unwrap();

        let config = DocsiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.index.output_file, "index.md");
        assert_eq!(config.updates.base_url, "http://docs.local");
        assert_eq!(config.updates.limit, 5);
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let config = DocsiteConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.index, IndexConfig::default());
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = DocsiteConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = DocsiteConfig::default_config_path() {
            assert!(path.ends_with("docsite/config.toml"));
        }
    }

    #[test]
    fn test_to_options() {
        let config = IndexConfig::default();
        let options = config.to_options(None);
        assert_eq!(options.content_dir, PathBuf::from("docs"));
        assert_eq!(options.max_depth, Some(1));

        let recursive = IndexConfig {
            max_depth: 0,
            ..Default::default()
        };
        let options = recursive.to_options(Some("other"));
        assert_eq!(options.content_dir, PathBuf::from("other"));
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_to_settings() {
        let config = UpdatesConfig {
            viewer_page: "viewer.html".to_string(),
            limit: 2,
            ..Default::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.viewer_page, "viewer.html");
        assert_eq!(settings.limit, 2);
        assert_eq!(settings.fallback_paths.len(), 4);
    }

    #[test]
    fn test_timeout() {
        assert_eq!(UpdatesConfig::default().timeout(), Some(Duration::from_secs(10)));
        let none = UpdatesConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(none.timeout(), None);
    }

    #[test]
    fn test_to_env_vars() {
        let vars = DocsiteConfig::default().to_env_vars().unwrap();
        let map: HashMap<_, _> = vars.into_iter().collect();
        assert_eq!(map.get("DOCSITE_INDEX_CONTENT_DIR").unwrap(), "docs");
        assert_eq!(map.get("DOCSITE_UPDATES_LIMIT").unwrap(), "5");
        assert!(!map.contains_key("DOCSITE_UPDATES_OUTPUT"));
    }

    #[test]
    fn test_config_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocsiteConfig>();
    }
}
