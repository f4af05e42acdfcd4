use glam::{Vec2, Vec3};

use crate::api::config::{SimConfig, POLAR_MARGIN};
use crate::api::types::CameraPose;

/// Authored overview parameters that a focus reset returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDefaults {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

/// Perspective camera with two modes of control.
///
/// In free orbit the eye is derived from spherical parameters around
/// `target`. While something else owns the camera (a transition, a focus)
/// the `pose` is written directly and the spherical parameters are left alone.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Distance from `target` in free orbit.
    pub radius: f32,
    /// Angle from +Y, kept within `[POLAR_MARGIN, π - POLAR_MARGIN]`.
    pub polar: f32,
    /// Angle around +Y, measured from +Z.
    pub azimuth: f32,
    /// Centre of the free orbit.
    pub target: Vec3,
    /// Pose handed to the renderer.
    pub pose: CameraPose,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    defaults: OrbitDefaults,
    min_distance: f32,
    max_distance: f32,
    rotation_speed: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &SimConfig) -> Self {
        let defaults = OrbitDefaults {
            radius: config.default_radius,
            polar: config.default_polar,
            azimuth: config.default_azimuth,
        };
        let mut camera = Self {
            radius: defaults.radius,
            polar: defaults.polar,
            azimuth: defaults.azimuth,
            target: Vec3::ZERO,
            pose: CameraPose::default(),
            fov_y: config.fov_y_radians(),
            aspect: 16.0 / 9.0,
            defaults,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            rotation_speed: config.rotation_speed,
        };
        camera.sync_from_spherical();
        camera
    }

    pub fn defaults(&self) -> OrbitDefaults {
        self.defaults
    }

    /// Eye position implied by the spherical parameters.
    pub fn spherical_eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.radius
    }

    /// Free-orbit pose: spherical eye looking at the orbit centre.
    pub fn spherical_pose(&self) -> CameraPose {
        CameraPose::new(self.spherical_eye(), self.target)
    }

    pub fn sync_from_spherical(&mut self) {
        self.pose = self.spherical_pose();
    }

    /// Orbit by a pixel delta. Dragging right decreases the azimuth.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * self.rotation_speed;
        self.polar = (self.polar + dy * self.rotation_speed)
            .clamp(POLAR_MARGIN, std::f32::consts::PI - POLAR_MARGIN);
    }

    /// Multiply the orbit radius, clamped to the authored distance range.
    pub fn zoom(&mut self, factor: f32) {
        self.radius = (self.radius * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Restore the authored radius, polar angle and azimuth.
    pub fn reset_spherical(&mut self) {
        self.radius = self.defaults.radius;
        self.polar = self.defaults.polar;
        self.azimuth = self.defaults.azimuth;
        self.target = Vec3::ZERO;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Move the eye a fraction of the way toward `goal`.
    pub fn smooth_toward(&mut self, goal: Vec3, factor: f32) {
        self.pose.eye += (goal - self.pose.eye) * factor;
    }

    /// World-space ray through a normalized device coordinate (x right, y up, both in [-1, 1]).
    /// Returns `(origin, unit direction)`.
    pub fn ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let forward = (self.pose.look_at - self.pose.eye)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;
        let dir = (forward + right * (ndc.x * half_w) + up * (ndc.y * half_h)).normalize();
        (self.pose.eye, dir)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
