//! Mutable beatgrid editing state
//!
//! The editor owns one track's grid while the user corrects it. Tempo and
//! offset edits are authoritative: they regenerate the grid wholesale and
//! discard any manual beat displacements.

use crate::grid::{generate_beats, BeatDetector, BeatGrid, GridEstimate};
use crate::types::{MAX_BPM, MIN_BPM};

/// Editing state for one track's beatgrid
///
/// The grid is either clean (derived purely from bpm/first-beat) or dirty
/// (at least one beat manually displaced). Any regeneration returns it to
/// clean.
#[derive(Debug, Clone)]
pub struct BeatGridEditor {
    track_id: String,
    track_duration: f64,
    bpm: f64,
    first_beat: f64,
    beats: Vec<f64>,
    /// True once a beat has been manually displaced
    dirty: bool,
}

impl BeatGridEditor {
    /// Create an editor for a track, generating the initial grid from the
    /// supplied tempo with the first beat at track start
    pub fn new(track_id: &str, track_duration: f64, bpm: f64) -> Self {
        Self::with_first_beat(track_id, track_duration, bpm, 0.0)
    }

    /// Create an editor with an explicit first-beat offset
    pub fn with_first_beat(
        track_id: &str,
        track_duration: f64,
        bpm: f64,
        first_beat: f64,
    ) -> Self {
        Self {
            track_id: track_id.to_string(),
            track_duration,
            bpm,
            first_beat,
            beats: generate_beats(bpm, first_beat, track_duration),
            dirty: false,
        }
    }

    /// Resume editing from a previously saved grid
    pub fn from_grid(grid: BeatGrid, track_duration: f64) -> Self {
        Self {
            track_id: grid.track_id,
            track_duration,
            bpm: grid.bpm,
            first_beat: grid.first_beat,
            beats: grid.beats,
            dirty: false,
        }
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn track_duration(&self) -> f64 {
        self.track_duration
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    pub fn first_beat(&self) -> f64 {
        self.first_beat
    }

    pub fn beats(&self) -> &[f64] {
        &self.beats
    }

    /// Whether the grid carries manual displacements that a regeneration
    /// would discard
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the tempo and regenerate the grid, discarding manual edits
    ///
    /// Non-finite or non-positive values are rejected and the grid is left
    /// unchanged; values outside the supported tempo range are clamped.
    pub fn set_bpm(&mut self, bpm: f64) {
        if !bpm.is_finite() || bpm <= 0.0 {
            log::warn!("ignoring invalid bpm {} for {}", bpm, self.track_id);
            return;
        }
        self.bpm = bpm.clamp(MIN_BPM, MAX_BPM);
        self.regenerate();
    }

    /// Set the first-beat offset and regenerate the grid, discarding manual
    /// edits
    ///
    /// Negative or non-finite offsets are rejected; the grid is left
    /// unchanged.
    pub fn set_first_beat(&mut self, first_beat: f64) {
        if !first_beat.is_finite() || first_beat < 0.0 {
            log::warn!(
                "ignoring invalid first beat {} for {}",
                first_beat,
                self.track_id
            );
            return;
        }
        self.first_beat = first_beat;
        self.regenerate();
    }

    /// Move a single beat to a new position (manual correction)
    ///
    /// The new time is clamped into the track, then the whole sequence is
    /// re-sorted; the displaced beat may end up at a different index than it
    /// started at. Out-of-range indices are ignored.
    pub fn displace_beat(&mut self, index: usize, new_time: f64) {
        let Some(slot) = self.beats.get_mut(index) else {
            log::warn!(
                "displace_beat index {} out of range for {} ({} beats)",
                index,
                self.track_id,
                self.beats.len()
            );
            return;
        };
        *slot = new_time.clamp(0.0, self.track_duration);
        self.beats.sort_by(|a, b| a.total_cmp(b));
        self.dirty = true;
    }

    /// Re-derive the grid from a detector's estimate (the "sync" action)
    ///
    /// The detector sees the editor's current values; applying its estimate
    /// regenerates the grid like any tempo/offset edit.
    pub fn sync(&mut self, detector: &dyn BeatDetector) {
        let current = GridEstimate {
            bpm: self.bpm,
            first_beat: self.first_beat,
        };
        let estimate = detector.detect(&self.track_id, current);
        if !estimate.bpm.is_finite() || estimate.bpm <= 0.0 || estimate.first_beat < 0.0 {
            log::warn!(
                "detector returned invalid estimate for {}: {:?}",
                self.track_id,
                estimate
            );
            return;
        }
        self.bpm = estimate.bpm.clamp(MIN_BPM, MAX_BPM);
        self.first_beat = estimate.first_beat;
        self.regenerate();
    }

    /// Snapshot the current grid for saving
    pub fn grid(&self) -> BeatGrid {
        BeatGrid {
            track_id: self.track_id.clone(),
            bpm: self.bpm,
            first_beat: self.first_beat,
            beats: self.beats.clone(),
        }
    }

    fn regenerate(&mut self) {
        self.beats = generate_beats(self.bpm, self.first_beat, self.track_duration);
        self.dirty = false;
    }
}
