//! Crossfade curve evaluation
//!
//! Curves map fade progress `t ∈ [0, 1]` to an intensity in display units.
//! One evaluation drives two complementary trajectories: the outgoing track's
//! fade-out and the incoming track's fade-in, mirrored about the editor's
//! midline. The pair is visual, not constant-power; the mixing engine applies
//! its own gain law.

use serde::{Deserialize, Serialize};

/// Full-scale curve height in display units
pub const CURVE_HEIGHT: f64 = 100.0;

/// Midline the outgoing/incoming trajectories mirror about
pub const MIDLINE: f64 = 100.0;

/// Crossfade curve shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    #[default]
    Linear,
    Exponential,
    SCurve,
    /// User-authored control points — not implemented yet, evaluates as
    /// linear until a curve editor exists
    Custom,
}

impl CurveKind {
    /// Curve intensity at fade progress `t ∈ [0, 1]`, in `[0, 1]`
    pub fn shape(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            CurveKind::Linear => t,
            CurveKind::Exponential => t * t,
            // Smoothstep: flat at both ends, steepest mid-transition
            CurveKind::SCurve => t * t * (3.0 - 2.0 * t),
            CurveKind::Custom => t,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear",
            CurveKind::Exponential => "Exponential",
            CurveKind::SCurve => "S-Curve",
            CurveKind::Custom => "Custom",
        }
    }
}

/// A single point on the evaluated curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Fade progress, 0 to 1
    pub x: f64,
    /// Curve intensity in display units, 0 to [`CURVE_HEIGHT`]
    pub y: f64,
}

/// A point on the complementary fade pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadePoint {
    /// Fade progress, 0 to 1
    pub x: f64,
    /// Outgoing track's trajectory (descends from the midline)
    pub outgoing: f64,
    /// Incoming track's trajectory (ascends from the midline)
    pub incoming: f64,
}

/// Evaluate a curve into `samples + 1` evenly spaced points
///
/// `x` runs 0 to 1, `y` runs 0 to [`CURVE_HEIGHT`]. Pure function of its
/// inputs. Zero samples yields the single starting point.
pub fn evaluate_curve(curve: CurveKind, samples: usize) -> Vec<CurvePoint> {
    (0..=samples)
        .map(|i| {
            let t = if samples == 0 {
                0.0
            } else {
                i as f64 / samples as f64
            };
            CurvePoint {
                x: t,
                y: curve.shape(t) * CURVE_HEIGHT,
            }
        })
        .collect()
}

/// Derive the complementary outgoing/incoming trajectory pair
///
/// Both trajectories start at the midline and diverge by half the curve
/// intensity: `outgoing = MIDLINE − y/2`, `incoming = MIDLINE + y/2`. They
/// stay mirror images of each other for every curve shape.
pub fn fade_trajectories(curve: CurveKind, samples: usize) -> Vec<FadePoint> {
    evaluate_curve(curve, samples)
        .into_iter()
        .map(|p| FadePoint {
            x: p.x,
            outgoing: MIDLINE - p.y / 2.0,
            incoming: MIDLINE + p.y / 2.0,
        })
        .collect()
}
