// extensions/tween.rs
//
// Camera transitions: time-boxed, eased interpolation of the camera pose.
//
// Only one transition exists at a time. Starting a new one replaces the one
// in flight; the replacement starts from wherever the camera currently is,
// so two transitions never blend.
//
// Usage:
//   let mut transitions = CameraTransitions::new();
//   transitions.start(CameraTween::new(camera.pose, goal, 2.0, Easing::CubicInOut));
//   let owned = transitions.tick(dt, &mut camera);  // true while a transition drives the camera

use crate::api::types::CameraPose;
use crate::renderer::camera::OrbitCamera;
use super::easing::{ease_vec3, Easing};

/// A single pose-to-pose camera animation.
#[derive(Debug, Clone)]
pub struct CameraTween {
    pub from: CameraPose,
    pub to: CameraPose,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time in seconds.
    pub elapsed: f32,
    pub easing: Easing,
}

impl CameraTween {
    pub fn new(from: CameraPose, to: CameraPose, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Pose at the current progress.
    pub fn sample(&self) -> CameraPose {
        let t = self.progress();
        CameraPose {
            eye: ease_vec3(self.from.eye, self.to.eye, t, self.easing),
            look_at: ease_vec3(self.from.look_at, self.to.look_at, t, self.easing),
        }
    }
}

/// Handle identifying one started transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub u32);

/// Single-slot owner of camera transitions (last transition wins).
#[derive(Debug, Default)]
pub struct CameraTransitions {
    active: Option<(TransitionId, CameraTween)>,
    next_id: u32,
}

impl CameraTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition, superseding any transition in flight.
    pub fn start(&mut self, tween: CameraTween) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        if let Some((old, _)) = self.active.replace((id, tween)) {
            log::debug!("camera transition {} superseded by {}", old.0, id.0);
        }
        id
    }

    /// Drop the transition in flight, leaving the camera where it is.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<TransitionId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    pub fn active(&self) -> Option<&CameraTween> {
        self.active.as_ref().map(|(_, t)| t)
    }

    /// Advance the transition in flight and write its pose to the camera.
    /// Returns true if a transition drove the camera this tick.
    pub fn tick(&mut self, dt: f32, camera: &mut OrbitCamera) -> bool {
        let Some((_, tween)) = self.active.as_mut() else {
            return false;
        };

        tween.elapsed += dt;
        camera.pose = tween.sample();

        if tween.is_complete() {
            camera.pose = tween.to;
            self.active = None;
        }
        true
    }
}
