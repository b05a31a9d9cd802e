//! Document list discovery.
//!
//! The site publishes a manifest (`docs/config.json`) listing every document.
//! Only `all_files[].path` is read; other fields are ignored.

use serde::Deserialize;

use crate::settings::UpdatesSettings;
use crate::source::DocumentSource;

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    all_files: Vec<ManifestFile>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    path: Option<String>,
}

/// Site-relative paths of the documents to consider.
///
/// Never fails: when the manifest cannot be fetched or parsed, or lists no
/// documents, the configured fallback paths are returned instead.
pub async fn load_manifest<S>(source: &S, settings: &UpdatesSettings) -> Vec<String>
where
    S: DocumentSource + ?Sized,
{
    match read_manifest(source, settings).await {
        Ok(paths) if !paths.is_empty() => {
            log::debug!("manifest lists {} documents", paths.len());
            paths
        }
        Ok(_) => {
            log::warn!(
                "manifest {} lists no documents, using fallback list",
                settings.manifest_path
            );
            settings.fallback_paths.clone()
        }
        Err(e) => {
            log::warn!(
                "failed to load manifest {}: {e}; using fallback list",
                settings.manifest_path
            );
            settings.fallback_paths.clone()
        }
    }
}

async fn read_manifest<S>(source: &S, settings: &UpdatesSettings) -> docsite_core::Result<Vec<String>>
where
    S: DocumentSource + ?Sized,
{
    let text = source.fetch_text(&settings.manifest_path).await?;
    let manifest: Manifest = serde_json::from_str(&text).map_err(|e| {
        docsite_core::Error::invalid_data(format!("{}: {e}", settings.manifest_path))
    })?;

    Ok(manifest
        .all_files
        .into_iter()
        .filter_map(|f| f.path)
        .map(|p| settings.content_path(&p))
        .collect())
}
