//! Standard paths for Syntax configuration and data files

use std::path::PathBuf;

/// Default collection directory
///
/// Returns: `~/Music/syntax-collection`
///
/// Holds the beatgrid store and per-app config files, shared between the
/// deck tools.
pub fn default_collection_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Music")
        .join("syntax-collection")
}

/// Default config file path for a given app
///
/// Returns: `~/Music/syntax-collection/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    default_collection_path().join(filename)
}
