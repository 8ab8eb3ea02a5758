//! Keyed beatgrid store
//!
//! Grids persist in a single JSON file holding a `track id → BeatGrid` map —
//! the file-system analogue of the `beatgrids` local-storage entry written by
//! earlier releases. Every update is a whole-map read-modify-write; there is
//! no per-key update, so concurrent writers can race (known gap, inherited
//! from the original store shape).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::default_collection_path;
use crate::grid::BeatGrid;

/// Store file name inside the collection directory
const STORE_FILE: &str = "beatgrids.json";

/// Errors from grid store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file
    #[error("Failed to read grid store: {0}")]
    Read(std::io::Error),

    /// Failed to write the store file
    #[error("Failed to write grid store: {0}")]
    Write(std::io::Error),

    /// Store file exists but does not parse as the expected JSON map
    #[error("Grid store is not valid JSON: {0}")]
    Malformed(serde_json::Error),

    /// Failed to serialize the map for writing
    #[error("Failed to serialize grid store: {0}")]
    Serialize(serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed `track id → BeatGrid` store
pub struct GridStore {
    path: PathBuf,
}

impl GridStore {
    /// Open a store at an explicit file path
    ///
    /// The file is created on first save; opening never touches the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store inside a collection directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE))
    }

    /// Open the store at its default location in the collection directory
    pub fn open_default() -> Self {
        Self::in_dir(&default_collection_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or replace the grid for its track
    pub fn save_grid(&self, grid: &BeatGrid) -> StoreResult<()> {
        let mut map = self.read_map()?;
        map.insert(grid.track_id.clone(), grid.clone());
        self.write_map(&map)?;
        log::info!("saved beatgrid for {} ({} beats)", grid.track_id, grid.beats.len());
        Ok(())
    }

    /// Load the grid for a track, if one has been saved
    pub fn load_grid(&self, track_id: &str) -> StoreResult<Option<BeatGrid>> {
        Ok(self.read_map()?.remove(track_id))
    }

    /// Remove a track's grid; returns whether one existed
    pub fn remove_grid(&self, track_id: &str) -> StoreResult<bool> {
        let mut map = self.read_map()?;
        let existed = map.remove(track_id).is_some();
        if existed {
            self.write_map(&map)?;
        }
        Ok(existed)
    }

    /// Track ids with a saved grid, sorted
    pub fn track_ids(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_map()?.keys().cloned().collect())
    }

    /// Read the whole map; a missing file is an empty store
    fn read_map(&self) -> StoreResult<BTreeMap<String, BeatGrid>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(StoreError::Read)?;
        serde_json::from_str(&contents).map_err(|e| {
            log::warn!("grid store {:?} is malformed: {}", self.path, e);
            StoreError::Malformed(e)
        })
    }

    /// Serialize and rewrite the whole map
    fn write_map(&self, map: &BTreeMap<String, BeatGrid>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        let json = serde_json::to_string_pretty(map).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> GridStore {
        GridStore::new(dir.path().join("beatgrids.json"))
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load_grid("t1").unwrap().is_none());
        assert!(store.track_ids().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let grid = BeatGrid::generate("t1", 128.0, 0.0, 180.0);
        store.save_grid(&grid).unwrap();

        let loaded = store.load_grid("t1").unwrap().unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_save_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let a = BeatGrid::generate("a", 120.0, 0.0, 60.0);
        let b = BeatGrid::generate("b", 174.0, 0.2, 90.0);
        store.save_grid(&a).unwrap();
        store.save_grid(&b).unwrap();

        assert_eq!(store.track_ids().unwrap(), vec!["a", "b"]);
        assert_eq!(store.load_grid("a").unwrap().unwrap(), a);

        // Re-saving one track leaves the other untouched
        let a2 = BeatGrid::generate("a", 100.0, 0.5, 60.0);
        store.save_grid(&a2).unwrap();
        assert_eq!(store.load_grid("a").unwrap().unwrap(), a2);
        assert_eq!(store.load_grid("b").unwrap().unwrap(), b);
    }

    #[test]
    fn test_remove_grid() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save_grid(&BeatGrid::generate("a", 120.0, 0.0, 60.0))
            .unwrap();
        assert!(store.remove_grid("a").unwrap());
        assert!(!store.remove_grid("a").unwrap());
        assert!(store.load_grid("a").unwrap().is_none());
    }

    #[test]
    fn test_malformed_store_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beatgrids.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = GridStore::new(&path);
        assert!(matches!(
            store.load_grid("t1"),
            Err(StoreError::Malformed(_))
        ));
    }
}
