//! Crossfade transition settings

use serde::{Deserialize, Serialize};

use crate::curve::CurveKind;

/// Shortest allowed transition, in beats
pub const MIN_LENGTH_BEATS: u32 = 1;

/// Longest allowed transition, in beats
pub const MAX_LENGTH_BEATS: u32 = 32;

/// Settings for one deck-to-deck transition
///
/// `length_beats` is clamped into `[MIN_LENGTH_BEATS, MAX_LENGTH_BEATS]` by
/// the model itself, not just by the slider that edits it. The automation
/// flags are read by the mixing engine; this crate only carries them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    /// Transition length in beats
    #[serde(deserialize_with = "deserialize_length")]
    length_beats: u32,
    /// Curve shaping the fade pair
    pub curve: CurveKind,
    /// Apply EQ automation during the transition
    pub eq_automation: bool,
    /// Apply a filter sweep during the transition
    pub filter_sweep: bool,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            length_beats: 16,
            curve: CurveKind::default(),
            eq_automation: true,
            filter_sweep: false,
        }
    }
}

impl CrossfadeConfig {
    pub fn new(length_beats: u32, curve: CurveKind) -> Self {
        Self {
            length_beats: clamp_length(length_beats),
            curve,
            ..Self::default()
        }
    }

    pub fn length_beats(&self) -> u32 {
        self.length_beats
    }

    /// Set the transition length, clamping into the supported range
    pub fn set_length_beats(&mut self, beats: u32) {
        self.length_beats = clamp_length(beats);
    }

    /// Transition length in seconds at a given tempo
    pub fn length_seconds(&self, bpm: f64) -> f64 {
        if bpm <= 0.0 {
            return 0.0;
        }
        self.length_beats as f64 * 60.0 / bpm
    }
}

fn clamp_length(beats: u32) -> u32 {
    beats.clamp(MIN_LENGTH_BEATS, MAX_LENGTH_BEATS)
}

/// Clamp lengths coming out of serialized configs too, so a hand-edited file
/// can't smuggle an out-of-range value past the model
fn deserialize_length<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(clamp_length(u32::deserialize(deserializer)?))
}
