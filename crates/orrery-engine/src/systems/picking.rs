//! Analytic picking: intersect the camera ray with each body's display sphere.

use glam::{Vec2, Vec3};

use crate::api::collaborators::RayPicker;
use crate::api::types::BodyId;
use crate::bodies::BodyRegistry;
use crate::renderer::camera::OrbitCamera;

/// Distance along a unit-direction ray to the first hit on a sphere, if any.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    // Origin inside the sphere.
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Picker over the bodies' display spheres, nearest hit wins.
#[derive(Debug, Clone, Copy)]
pub struct SpherePicker {
    /// Multiplier on the display radius, making small planets easier to hit.
    pub hit_scale: f32,
}

impl SpherePicker {
    pub fn new(hit_scale: f32) -> Self {
        Self { hit_scale }
    }
}

impl Default for SpherePicker {
    fn default() -> Self {
        Self { hit_scale: 1.5 }
    }
}

impl RayPicker for SpherePicker {
    fn pick(&mut self, ndc: Vec2, camera: &OrbitCamera, registry: &BodyRegistry) -> Option<BodyId> {
        let (origin, dir) = camera.ray(ndc);
        registry
            .iter()
            .filter_map(|body| {
                let r = body.descriptor.display_radius * self.hit_scale;
                ray_sphere(origin, dir, body.position(), r).map(|t| (body.id, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
