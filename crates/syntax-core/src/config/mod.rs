//! Configuration for the Syntax deck tools
//!
//! Generic YAML config loading/saving plus the deck configuration structure
//! and standard file locations. Apps load their config with [`load_config`]
//! (defaults on missing or unreadable files) and persist it with
//! [`save_config`].

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{default_collection_path, default_config_path};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deck configuration
///
/// Stored as YAML; unknown or missing fields fall back to defaults so old
/// config files keep loading across releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Tempo assumed for tracks without analysis data
    pub default_bpm: f64,
    /// Playhead clock rate in ticks per second
    pub tick_rate_hz: u32,
    /// Collection directory holding the beatgrid store
    pub collection_path: PathBuf,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_bpm: 128.0, // Standard house/techno BPM
            tick_rate_hz: 60,   // Matches the UI refresh rate
            collection_path: default_collection_path(),
        }
    }
}
