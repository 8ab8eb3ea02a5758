//! Syntax Mix - crossfade curve evaluation and transition settings
//!
//! The curve evaluator produces the point tables the crossfade editor renders
//! (one shape curve, plus the complementary outgoing/incoming trajectory
//! pair); [`CrossfadeConfig`] carries the transition settings the mixing
//! engine consumes.

mod config;
mod curve;

pub use config::{CrossfadeConfig, MAX_LENGTH_BEATS, MIN_LENGTH_BEATS};
pub use curve::{evaluate_curve, fade_trajectories, CurveKind, CurvePoint, FadePoint, CURVE_HEIGHT, MIDLINE};
