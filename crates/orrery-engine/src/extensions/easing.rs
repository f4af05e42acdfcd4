// extensions/easing.rs
//
// Easing curves for camera transitions. Pure math, no camera or body types.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Easing curve, named after the usual tweening-library curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    CubicIn,
    CubicOut,
    /// Stronger slow start and end. Default for focus transitions.
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Map normalized time `t` to eased progress. Input is clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    a.lerp(b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];

    #[test]
    fn every_curve_hits_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        for easing in [Easing::QuadInOut, Easing::CubicInOut, Easing::SineInOut] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn cubic_in_out_starts_slowly() {
        assert!(Easing::CubicInOut.apply(0.1) < 0.1);
        assert!(Easing::CubicInOut.apply(0.9) > 0.9);
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        assert_eq!(Easing::QuadIn.apply(-3.0), 0.0);
        assert_eq!(Easing::QuadIn.apply(7.0), 1.0);
    }

    #[test]
    fn ease_vec3_interpolates() {
        let v = ease_vec3(Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0), 0.5, Easing::Linear);
        assert!((v - Vec3::new(5.0, 10.0, 15.0)).length() < 1e-5);
    }
}
