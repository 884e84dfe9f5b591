use crate::app::error::IndexError;
use crate::app::models::IndexConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub fn load_config(path: &Path) -> Result<IndexConfig, IndexError> {
    let content = fs::read_to_string(path).map_err(|e| IndexError::config(path, e))?;
    let config: IndexConfig =
        serde_json::from_str(&content).map_err(|e| IndexError::config(path, e))?;

    log::debug!(
        "Loaded {:?}: baseUrl={}, {} excluded, {} ordered",
        path,
        config.base_url,
        config.exclude.len(),
        config.order.len()
    );
    Ok(config)
}

/// Joins `baseUrl` onto the project root. The result must be an existing directory.
pub fn resolve_source_root(
    root: &Path,
    config: &IndexConfig,
    config_path: &Path,
) -> Result<PathBuf, IndexError> {
    let source_root = root.join(&config.base_url);
    if !source_root.is_dir() {
        return Err(IndexError::config(
            config_path,
            format!("baseUrl {:?} is not a directory", source_root),
        ));
    }
    Ok(source_root)
}
