//! Beat detection seam
//!
//! The editor's "sync" action asks a detector for a tempo and first-beat
//! estimate. Real audio analysis lives outside this crate; the shipped
//! default simply hands back the values the editor already has.

/// Tempo and first-beat estimate produced by a detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEstimate {
    pub bpm: f64,
    pub first_beat: f64,
}

/// Strategy for estimating a track's beatgrid
///
/// Implementations may run audio analysis, query a tag database, or do
/// nothing at all; the editor only consumes the returned estimate.
pub trait BeatDetector {
    /// Estimate tempo and first beat for `track_id`
    ///
    /// `current` carries the editor's present values so detectors that only
    /// refine one field (or none) have something to echo back.
    fn detect(&self, track_id: &str, current: GridEstimate) -> GridEstimate;
}

/// Default detector: returns the current values unchanged
///
/// Stands in until a real analysis backend is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDetector;

impl BeatDetector for PassthroughDetector {
    fn detect(&self, track_id: &str, current: GridEstimate) -> GridEstimate {
        log::debug!("passthrough detect for {}: echoing current grid", track_id);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_echoes_current() {
        let current = GridEstimate {
            bpm: 128.0,
            first_beat: 0.42,
        };
        let estimate = PassthroughDetector.detect("t1", current);
        assert_eq!(estimate, current);
    }
}
