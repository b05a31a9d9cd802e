//! Handler functions for `docsite config` subcommands.

use std::path::PathBuf;

use docsite_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::DocsiteConfig;

/// Handle a config subcommand.
///
/// Receives the raw `--config` path because `path` and `init` work before a
/// config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            let config = DocsiteConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = DocsiteConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `docsite config init` to create it)");
    }
    Ok(())
}

fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = DocsiteConfig::load(config_path)?;
    println!("{}", config_value(&config, key)?);
    Ok(())
}

/// Look up a dotted key in the resolved configuration.
pub fn config_value(config: &DocsiteConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = DocsiteConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `docsite config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    // Reject edits that would leave the file unloadable.
    toml::from_str::<DocsiteConfig>(&toml_str)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => DocsiteConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = DocsiteConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

fn cmd_config_export(config: &DocsiteConfig, docker_env: bool) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            println!("--env {key}={value}");
        } else {
            println!("{key}={value}");
        }
    }
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = parts
        .pop()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| Error::config("Empty key path"))?;

    let mut current = root;
    for part in parts {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?
        .insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value: bool, integer, float, then string.
fn parse_value(s: &str) -> toml::Value {
    if let Ok(b) = s.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, DocsiteConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    #[test]
    fn test_config_value() {
        let config = DocsiteConfig::default();
        assert_eq!(config_value(&config, "updates.limit").unwrap(), "5");
        assert_eq!(config_value(&config, "index.content_dir").unwrap(), "docs");
        assert!(config_value(&config, "index").unwrap().contains("output_file"));

        let err = config_value(&config, "nonexistent.key").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cmd_config_get() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "updates.base_url").is_ok());
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "updates.nope").is_err());
    }

    #[test]
    fn test_cmd_config_set() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "updates.limit", "8").unwrap();
        cmd_config_set(Some(path.to_str().unwrap()), "updates.output", "out.html").unwrap();

        let config = DocsiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.updates.limit, 8);
        assert_eq!(config.updates.output.as_deref(), Some("out.html"));
    }

    #[test]
    fn test_cmd_config_set_rejects_bad_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(Some(path.to_str().unwrap()), "updates.limit", "many");
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set(Some("/nonexistent/config.toml"), "updates.limit", "1");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_cmd_config_init() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("docsite").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[index]"));
        assert!(content.contains("[updates]"));

        let again = cmd_config_init(Some(path.to_str().unwrap()), false);
        assert!(again.unwrap_err().to_string().contains("already exists"));
        assert!(cmd_config_init(Some(path.to_str().unwrap()), true).is_ok());
    }

    #[test]
    fn test_cmd_config_export() {
        let config = DocsiteConfig::default();
        assert!(cmd_config_export(&config, false).is_ok());
        assert!(cmd_config_export(&config, true).is_ok());
    }

    #[test]
    fn test_nested_values() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "updates.limit", toml::Value::Integer(3)).unwrap();
        assert_eq!(
            get_nested_value(&val, "updates.limit"),
            Some(&toml::Value::Integer(3))
        );
        assert!(get_nested_value(&val, "updates.missing").is_none());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
        assert!(set_nested_value(&mut val, "updates.limit.x", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(parse_value("docs"), toml::Value::String("docs".to_string()));
    }
}
