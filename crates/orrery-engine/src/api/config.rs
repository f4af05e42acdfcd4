use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result};
use crate::extensions::easing::Easing;

/// Smallest allowed distance between the polar angle and either pole.
pub const POLAR_MARGIN: f32 = 0.1;

/// Largest body capacity the frame buffer may be sized for.
pub const MAX_BODIES_LIMIT: usize = 4096;

/// Configuration for the simulation, authored once and handed to `SimContext::new`.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Free-orbit radius of the overview pose.
    pub default_radius: f32,
    /// Polar angle (from +Y) of the overview pose, radians.
    pub default_polar: f32,
    /// Azimuth (around +Y, from +Z) of the overview pose, radians.
    pub default_azimuth: f32,
    /// Closest free-orbit radius reachable by zooming.
    pub min_distance: f32,
    /// Farthest free-orbit radius reachable by zooming.
    pub max_distance: f32,
    /// Radians of orbit per pixel of drag.
    pub rotation_speed: f32,
    /// Radius multiplier per zoom-out event (its inverse zooms in).
    pub zoom_step: f32,
    /// Pixels a pressed pointer must travel before a click becomes a drag.
    pub drag_threshold: f32,
    /// Duration of a focus/reset camera transition, seconds.
    pub transition_seconds: f32,
    /// Easing curve of focus/reset transitions.
    pub transition_easing: Easing,
    /// Fraction of the remaining distance covered per tick while following.
    pub follow_smoothing: f32,
    /// Eye offset from the origin when the Sun is focused.
    pub sun_view_offset: [f32; 3],
    /// Eye offset from a focused planet, per unit of display radius.
    pub follow_offset_per_radius: [f32; 3],
    /// Vertical field of view, degrees.
    pub fov_y_degrees: f32,
    /// Upper bound on the frame delta fed to camera transitions, seconds.
    pub max_frame_dt: f32,
    /// Global speed multiplier at startup.
    pub global_speed: f64,
    /// Body capacity of the shared frame buffer.
    pub max_bodies: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            default_radius: 120.0,
            default_polar: 1.1,
            default_azimuth: 0.0,
            min_distance: 10.0,
            max_distance: 400.0,
            rotation_speed: 0.005,
            zoom_step: 1.1,
            drag_threshold: 5.0,
            transition_seconds: 2.0,
            transition_easing: Easing::CubicInOut,
            follow_smoothing: 0.05,
            sun_view_offset: [0.0, 25.0, 70.0],
            follow_offset_per_radius: [0.0, 2.0, 6.0],
            fov_y_degrees: 60.0,
            max_frame_dt: 0.1,
            global_speed: 1.0,
            max_bodies: 16,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the camera or transitions misbehave.
    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> OrreryError {
            OrreryError::InvalidConfig { field, reason: reason.into() }
        }

        if !(self.min_distance > 0.0) {
            return Err(invalid("min_distance", "must be positive"));
        }
        if self.max_distance < self.min_distance {
            return Err(invalid("max_distance", "must not be below min_distance"));
        }
        if self.default_radius < self.min_distance || self.default_radius > self.max_distance {
            return Err(invalid("default_radius", "must lie within [min_distance, max_distance]"));
        }
        let polar_max = std::f32::consts::PI - POLAR_MARGIN;
        if self.default_polar < POLAR_MARGIN || self.default_polar > polar_max {
            return Err(invalid("default_polar", format!("must lie within [{POLAR_MARGIN}, {polar_max}]")));
        }
        if !(self.zoom_step > 1.0) {
            return Err(invalid("zoom_step", "must be greater than 1"));
        }
        if !(self.follow_smoothing > 0.0 && self.follow_smoothing <= 1.0) {
            return Err(invalid("follow_smoothing", "must lie within (0, 1]"));
        }
        if self.transition_seconds < 0.0 {
            return Err(invalid("transition_seconds", "must not be negative"));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(invalid("fov_y_degrees", "must lie within (0, 180)"));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt >= 0.0) {
            return Err(invalid("max_frame_dt", "must be finite and not negative"));
        }
        if self.max_bodies == 0 || self.max_bodies > MAX_BODIES_LIMIT {
            return Err(invalid("max_bodies", format!("must lie within [1, {MAX_BODIES_LIMIT}]")));
        }
        Ok(())
    }

    pub fn sun_view_offset(&self) -> Vec3 {
        Vec3::from_array(self.sun_view_offset)
    }

    /// Eye offset for a focused planet; grows linearly with the display radius.
    pub fn follow_offset(&self, display_radius: f32) -> Vec3 {
        Vec3::from_array(self.follow_offset_per_radius) * display_radius
    }

    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "max_distance": 250.0, "transition_easing": "sine_in_out" }"#).unwrap();
        assert_eq!(config.max_distance, 250.0);
        assert_eq!(config.transition_easing, Easing::SineInOut);
        assert_eq!(config.min_distance, SimConfig::default().min_distance);
    }

    #[test]
    fn rejects_inverted_distance_range() {
        let err = SimConfig::from_json(r#"{ "min_distance": 50.0, "max_distance": 20.0 }"#).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidConfig { field: "max_distance", .. }));
    }

    #[test]
    fn rejects_shrinking_zoom_step() {
        let config = SimConfig { zoom_step: 0.9, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_frame_clamp() {
        let err = SimConfig::from_json(r#"{ "max_frame_dt": -1.0 }"#).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidConfig { field: "max_frame_dt", .. }));

        let config = SimConfig { max_frame_dt: f32::NAN, ..SimConfig::default() };
        assert!(config.validate().is_err());
        let config = SimConfig { max_frame_dt: 0.0, ..SimConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_body_capacity() {
        let json = format!(r#"{{ "max_bodies": {} }}"#, usize::MAX / 4);
        let err = SimConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidConfig { field: "max_bodies", .. }));

        let config = SimConfig { max_bodies: MAX_BODIES_LIMIT, ..SimConfig::default() };
        assert!(config.validate().is_ok());
        let config = SimConfig { max_bodies: MAX_BODIES_LIMIT + 1, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, OrreryError::Parse(_)));
    }

    #[test]
    fn follow_offset_scales_with_radius() {
        let config = SimConfig::default();
        let small = config.follow_offset(1.0);
        let large = config.follow_offset(5.0);
        assert!((large.length() - 5.0 * small.length()).abs() < 1e-4);
    }
}
