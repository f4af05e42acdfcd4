use crate::api::collaborators::{InfoOverlay, RayPicker, SceneSink};
use crate::api::types::{BodyId, CameraPose};
use crate::bodies::BodyRegistry;
use crate::core::context::SimContext;
use crate::error::{OrreryError, Result};
use crate::systems::focus::FocusState;
use super::protocol::*;

/// Per-frame values that are not transforms, written into the header after
/// the frame has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    pub focus: FocusState,
    pub paused: bool,
    pub global_speed: f64,
    pub decor_time: f32,
    pub transition_active: bool,
    pub fov_y: f32,
    pub aspect: f32,
}

impl FrameStatus {
    pub fn capture<S: SceneSink, O: InfoOverlay, P: RayPicker>(ctx: &SimContext<S, O, P>) -> Self {
        Self {
            focus: ctx.focus_state(),
            paused: ctx.is_paused(),
            global_speed: ctx.global_speed(),
            decor_time: ctx.decor_time(),
            transition_active: ctx.transitions().is_active(),
            fov_y: ctx.camera().fov_y,
            aspect: ctx.camera().aspect,
        }
    }
}

/// Flat float buffer the JS renderer reads through a raw pointer.
///
/// Implements `SceneSink`, so the simulation writes transforms straight into
/// the records the renderer consumes.
pub struct FrameBuffer {
    layout: FrameLayout,
    data: Vec<f32>,
    body_count: usize,
}

impl FrameBuffer {
    pub fn new(layout: FrameLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_BODIES] = layout.max_bodies as f32;
        data[HEADER_CAMERA_OFFSET] = layout.camera_offset as f32;
        data[HEADER_BODY_OFFSET] = layout.body_offset as f32;
        data[HEADER_FOCUSED_BODY] = -1.0;
        Self {
            layout,
            data,
            body_count: 0,
        }
    }

    /// Fill the static part of every body record. Fails if the registry
    /// exceeds the buffer's body capacity.
    pub fn register_bodies(&mut self, registry: &BodyRegistry) -> Result<()> {
        if registry.len() > self.layout.max_bodies {
            return Err(OrreryError::InvalidConfig {
                field: "max_bodies",
                reason: format!(
                    "{} bodies do not fit in a buffer sized for {}",
                    registry.len(),
                    self.layout.max_bodies
                ),
            });
        }

        for body in registry.iter() {
            let position = body.position();
            let record = self.record_mut(body.id.index());
            *record = BodyRecord {
                x: position.x,
                y: position.y,
                z: position.z,
                spin: body.state.spin_angle as f32,
                display_radius: body.descriptor.display_radius,
                emissive: if body.descriptor.emissive.is_some() { 1.0 } else { 0.0 },
                focused: 0.0,
                _pad: 0.0,
            };
        }
        self.body_count = registry.len();
        self.data[HEADER_BODY_COUNT] = self.body_count as f32;
        Ok(())
    }

    fn record_mut(&mut self, index: usize) -> &mut BodyRecord {
        let start = self.layout.body_start(index);
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut self.data[start..start + BODY_FLOATS]))
    }

    fn camera_mut(&mut self) -> &mut CameraRecord {
        let start = self.layout.camera_offset;
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut self.data[start..start + CAMERA_FLOATS]))
    }

    pub fn body(&self, id: BodyId) -> Option<&BodyRecord> {
        if id.index() >= self.body_count {
            return None;
        }
        let start = self.layout.body_start(id.index());
        Some(bytemuck::from_bytes(bytemuck::cast_slice(&self.data[start..start + BODY_FLOATS])))
    }

    pub fn camera(&self) -> &CameraRecord {
        let start = self.layout.camera_offset;
        bytemuck::from_bytes(bytemuck::cast_slice(&self.data[start..start + CAMERA_FLOATS]))
    }

    /// Header, focus flags and projection. Bumps the frame counter.
    pub fn write_status(&mut self, status: &FrameStatus) {
        let (focus_code, focused) = match status.focus {
            FocusState::Idle => (0.0, None),
            FocusState::FocusedStatic { body } => (1.0, Some(body)),
            FocusState::FocusedFollowing { body } => (2.0, Some(body)),
        };

        self.data[HEADER_FRAME_COUNTER] = (self.data[HEADER_FRAME_COUNTER] + 1.0) % FRAME_COUNTER_WRAP;
        self.data[HEADER_FOCUS_STATE] = focus_code;
        self.data[HEADER_FOCUSED_BODY] = focused.map_or(-1.0, |id| id.0 as f32);
        self.data[HEADER_PAUSED] = if status.paused { 1.0 } else { 0.0 };
        self.data[HEADER_GLOBAL_SPEED] = status.global_speed as f32;
        self.data[HEADER_DECOR_TIME] = status.decor_time;
        self.data[HEADER_TRANSITION_ACTIVE] = if status.transition_active { 1.0 } else { 0.0 };

        for index in 0..self.body_count {
            let is_focused = focused.is_some_and(|id| id.index() == index);
            self.record_mut(index).focused = if is_focused { 1.0 } else { 0.0 };
        }

        let camera = self.camera_mut();
        camera.fov_y = status.fov_y;
        camera.aspect = status.aspect;
    }

    pub fn header(&self, field: usize) -> f32 {
        self.data[field]
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn body_count(&self) -> usize {
        self.body_count
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl SceneSink for FrameBuffer {
    fn set_body_transform(&mut self, id: BodyId, position: glam::Vec3, spin: f32) {
        if id.index() >= self.body_count {
            log::warn!("transform for unregistered body {} dropped", id.0);
            return;
        }
        let record = self.record_mut(id.index());
        record.x = position.x;
        record.y = position.y;
        record.z = position.z;
        record.spin = spin;
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        let camera = self.camera_mut();
        camera.eye_x = pose.eye.x;
        camera.eye_y = pose.eye.y;
        camera.eye_z = pose.eye.z;
        camera.look_x = pose.look_at.x;
        camera.look_y = pose.look_at.y;
        camera.look_z = pose.look_at.z;
    }
}
