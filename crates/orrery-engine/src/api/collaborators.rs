//! Contracts for everything the simulation drives but does not own.
//!
//! The browser side supplies the real implementations (a shared frame
//! buffer read by the renderer, a DOM overlay, a mesh raycaster). Tests
//! supply recording fakes.

use glam::{Vec2, Vec3};

use crate::api::types::{BodyId, CameraPose};
use crate::bodies::{BodyDescriptor, BodyRegistry};
use crate::renderer::camera::OrbitCamera;

/// Receives per-frame transform writes for the scene graph.
pub trait SceneSink {
    /// Place a body's node at `position` with `spin` radians about the vertical axis.
    fn set_body_transform(&mut self, id: BodyId, position: Vec3, spin: f32);

    /// Update the render camera.
    fn set_camera(&mut self, pose: &CameraPose);
}

/// The informational panel. Shown and hidden together with focus.
pub trait InfoOverlay {
    fn show_info(&mut self, body: &BodyDescriptor);
    fn hide_info(&mut self);
}

/// Ray intersection against body meshes.
pub trait RayPicker {
    /// Nearest body hit by the ray through `ndc`, if any.
    fn pick(&mut self, ndc: Vec2, camera: &OrbitCamera, registry: &BodyRegistry) -> Option<BodyId>;
}

impl<T: SceneSink + ?Sized> SceneSink for &mut T {
    fn set_body_transform(&mut self, id: BodyId, position: Vec3, spin: f32) {
        (**self).set_body_transform(id, position, spin);
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        (**self).set_camera(pose);
    }
}
