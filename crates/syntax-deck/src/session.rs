//! Deck editor session
//!
//! Wires one track's grid editor to the grid store, the crossfade settings,
//! and the playhead clock. The hosting view supplies track id, duration, and
//! tempo; everything else lives here.

use syntax_core::config::DeckConfig;
use syntax_core::grid::BeatGridEditor;
use syntax_core::store::{GridStore, StoreResult};
use syntax_mix::CrossfadeConfig;

use crate::clock::PlayheadClock;

/// Editing session for one loaded track
pub struct DeckSession {
    editor: BeatGridEditor,
    store: GridStore,
    /// Transition settings for this deck
    pub crossfade: CrossfadeConfig,
    clock: Option<PlayheadClock>,
    tick_rate_hz: u32,
    /// Last user-facing failure message, consumed by the toast layer
    status: Option<String>,
}

impl DeckSession {
    /// Open a session for a track, resuming its saved grid when one exists
    ///
    /// Falls back to a freshly generated grid (first beat at track start)
    /// when nothing is stored or the store can't be read.
    pub fn open(config: &DeckConfig, track_id: &str, track_duration: f64, bpm: f64) -> Self {
        let store = GridStore::in_dir(&config.collection_path);

        let editor = match store.load_grid(track_id) {
            Ok(Some(grid)) => BeatGridEditor::from_grid(grid, track_duration),
            Ok(None) => BeatGridEditor::new(track_id, track_duration, bpm),
            Err(e) => {
                log::warn!("couldn't load saved grid for {}: {}", track_id, e);
                BeatGridEditor::new(track_id, track_duration, bpm)
            }
        };

        Self {
            editor,
            store,
            crossfade: CrossfadeConfig::default(),
            clock: None,
            tick_rate_hz: config.tick_rate_hz,
            status: None,
        }
    }

    pub fn editor(&self) -> &BeatGridEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut BeatGridEditor {
        &mut self.editor
    }

    /// Persist the current grid
    ///
    /// On failure the error is logged, a status message is queued for the
    /// toast layer, and the in-memory grid is left untouched.
    pub fn save(&mut self) -> StoreResult<()> {
        match self.store.save_grid(&self.editor.grid()) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("failed to save beatgrid for {}: {}", self.editor.track_id(), e);
                self.status = Some("Failed to save beatgrid".to_string());
                Err(e)
            }
        }
    }

    /// Take the pending status message, if any
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }

    /// Start the playhead clock (restarts from zero when already playing)
    pub fn start_playback(&mut self) {
        self.clock = Some(PlayheadClock::start(self.tick_rate_hz));
    }

    /// Stop and discard the playhead clock
    pub fn stop_playback(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.stop();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_some()
    }

    /// Current playhead position in seconds, clamped to the track duration
    ///
    /// Zero while stopped. Ticks are drained as a side effect so the channel
    /// never backs up.
    pub fn playhead(&self) -> f64 {
        match &self.clock {
            Some(clock) => {
                let _ = clock.try_tick();
                clock
                    .elapsed()
                    .as_secs_f64()
                    .min(self.editor.track_duration())
            }
            None => 0.0,
        }
    }
}
