//! Common types for Syntax
//!
//! This module contains the fundamental track metadata types shared by the
//! grid editor, the beatgrid store, and the deck session layer.

use serde::{Deserialize, Serialize};

use crate::music::MusicalKey;

/// Beats per bar assumed throughout the suite (4/4 is the DJ default)
pub const BEATS_PER_BAR: u32 = 4;

/// Lowest tempo the grid editor accepts
pub const MIN_BPM: f64 = 20.0;

/// Highest tempo the grid editor accepts
pub const MAX_BPM: f64 = 300.0;

/// Track metadata as displayed in the library browser
///
/// BPM, key, and energy are analysis results supplied by the hosting
/// application; nothing in this crate computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMeta {
    /// Opaque track identifier (store key)
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Tempo in beats per minute
    pub bpm: f64,
    /// Musical key string like "Am" or "F#"
    pub key: String,
    /// Perceived energy, 1-10
    pub energy: u8,
    /// Track length in seconds
    pub duration_seconds: f64,
}

impl TrackMeta {
    /// Seconds between beats at this track's tempo
    pub fn beat_interval(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Camelot wheel code for the track's key (e.g. "8A" for Am)
    ///
    /// Returns `None` when the key string doesn't parse.
    pub fn camelot_code(&self) -> Option<String> {
        let key = MusicalKey::parse(&self.key)?;
        let (position, letter) = key.camelot();
        Some(format!("{}{}", position, letter))
    }
}
