use glam::Vec3;

/// Index of a body in the registry. Assigned in insertion order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where the camera sits and what it looks at, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(eye: Vec3, look_at: Vec3) -> Self {
        Self { eye, look_at }
    }

    /// Distance from the eye to the look-at point.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.look_at)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            look_at: Vec3::ZERO,
        }
    }
}
