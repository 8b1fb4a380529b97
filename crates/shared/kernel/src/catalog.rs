use crate::error::{ConfigError, ConfigErrorExt};
use conwire_domain::TypeCatalog;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

const CATALOG_EXTENSION: &str = "json";

/// Reads one JSON type catalog (`{"types": [...]}`).
///
/// # Errors
/// * [`ConfigError::Io`] if the file cannot be read.
/// * [`ConfigError::Json`] if its content is not a catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<TypeCatalog, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).context(path.display().to_string())?;
    let catalog: TypeCatalog = serde_json::from_str(&raw).context(path.display().to_string())?;

    debug!(path = %path.display(), types = catalog.len(), "Read type catalog");
    Ok(catalog)
}

/// Merges every `*.json` catalog beneath `dir`, in sorted path order.
///
/// # Errors
/// * [`ConfigError::Io`] if `dir` is missing or cannot be walked.
/// * [`ConfigError::Json`] on the first malformed catalog.
pub fn load_catalog_dir(dir: impl AsRef<Path>) -> Result<TypeCatalog, ConfigError> {
    let dir = dir.as_ref();
    if !std::fs::metadata(dir).context(dir.display().to_string())?.is_dir() {
        return Err(ConfigError::Io {
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            context: Some(dir.display().to_string().into()),
        });
    }

    let mut catalog = TypeCatalog::default();
    let mut files = 0usize;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from).context("Walking catalog directory")?;
        let path = entry.path();

        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(CATALOG_EXTENSION))
        {
            catalog.extend(load_catalog(path)?);
            files += 1;
        }
    }

    info!(dir = %dir.display(), files, types = catalog.len(), "Loaded type catalogs");
    Ok(catalog)
}
