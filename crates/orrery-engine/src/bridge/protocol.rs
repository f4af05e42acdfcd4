//! Shared frame buffer layout.
//! Must stay in sync with the TypeScript reader (`frame.ts`).
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 8 floats]
//! [Bodies: max_bodies × 8 floats]
//! ```
//!
//! Capacities and section offsets are written into the header once at init,
//! so the reader never hardcodes them.

use bytemuck::{Pod, Zeroable};

use crate::api::config::SimConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
/// Counts status writes modulo `FRAME_COUNTER_WRAP`. Readers compare for
/// inequality, never order.
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_CAMERA_OFFSET: usize = 4;
pub const HEADER_BODY_OFFSET: usize = 5;
/// 0 = idle, 1 = focused static, 2 = focused following.
pub const HEADER_FOCUS_STATE: usize = 6;
/// Focused body index, or -1.
pub const HEADER_FOCUSED_BODY: usize = 7;
pub const HEADER_PAUSED: usize = 8;
pub const HEADER_GLOBAL_SPEED: usize = 9;
/// Decorative shader time, seconds. Frozen while paused.
pub const HEADER_DECOR_TIME: usize = 10;
pub const HEADER_TRANSITION_ACTIVE: usize = 11;
// 12..16 reserved.

pub const PROTOCOL_VERSION: f32 = 1.0;

/// 2^24: past this an f32 can no longer count by one.
pub const FRAME_COUNTER_WRAP: f32 = 16_777_216.0;

/// Floats in the camera block (wire format, fixed).
pub const CAMERA_FLOATS: usize = 8;

/// Floats per body record (wire format, fixed).
pub const BODY_FLOATS: usize = 8;

/// Camera block: eye, vertical fov, look-at, aspect.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraRecord {
    pub eye_x: f32,
    pub eye_y: f32,
    pub eye_z: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub look_x: f32,
    pub look_y: f32,
    pub look_z: f32,
    pub aspect: f32,
}

/// One body's node transform plus the flags the renderer needs per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation about the vertical axis, radians.
    pub spin: f32,
    pub display_radius: f32,
    /// 1.0 when the body glows (the Sun), else 0.0.
    pub emissive: f32,
    /// 1.0 on the focused body.
    pub focused: f32,
    pub _pad: f32,
}

/// Runtime-computed section offsets for a given body capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_bodies: usize,
    pub camera_offset: usize,
    pub body_offset: usize,
    pub body_data_floats: usize,
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// `max_bodies` is assumed validated by `SimConfig::validate`.
    pub fn new(max_bodies: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let body_offset = camera_offset + CAMERA_FLOATS;
        let body_data_floats = max_bodies * BODY_FLOATS;
        let buffer_total_floats = body_offset + body_data_floats;

        Self {
            max_bodies,
            camera_offset,
            body_offset,
            body_data_floats,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_bodies)
    }

    /// Float offset of body record `index`.
    #[inline]
    pub fn body_start(&self, index: usize) -> usize {
        self.body_offset + index * BODY_FLOATS
    }
}
