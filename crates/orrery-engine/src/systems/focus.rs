//! Camera-focus state machine.
//!
//! Focus and overlay visibility change together in every transition: there
//! is never a focused body without a visible overlay, or the reverse.

use glam::Vec3;

use crate::api::collaborators::InfoOverlay;
use crate::api::config::SimConfig;
use crate::api::types::{BodyId, CameraPose};
use crate::bodies::{Body, BodyRegistry};
use crate::extensions::easing::Easing;
use crate::extensions::tween::{CameraTransitions, CameraTween};
use crate::renderer::camera::OrbitCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// No focus; the free-orbit controls own the camera.
    #[default]
    Idle,
    /// Locked onto the Sun, which never moves.
    FocusedStatic { body: BodyId },
    /// Locked onto a planet; the camera re-targets every tick.
    FocusedFollowing { body: BodyId },
}

impl FocusState {
    pub fn focused_body(&self) -> Option<BodyId> {
        match *self {
            FocusState::Idle => None,
            FocusState::FocusedStatic { body } | FocusState::FocusedFollowing { body } => Some(body),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FocusState::Idle)
    }

    pub fn is_following(&self) -> bool {
        matches!(self, FocusState::FocusedFollowing { .. })
    }
}

pub struct FocusMachine {
    state: FocusState,
    sun_view_offset: Vec3,
    follow_offset_per_radius: Vec3,
    smoothing: f32,
    transition_seconds: f32,
    easing: Easing,
}

impl FocusMachine {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            state: FocusState::Idle,
            sun_view_offset: config.sun_view_offset(),
            follow_offset_per_radius: Vec3::from_array(config.follow_offset_per_radius),
            smoothing: config.follow_smoothing,
            transition_seconds: config.transition_seconds,
            easing: config.transition_easing,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Eye position the camera settles at while following `body`.
    pub fn follow_target(&self, body: &Body) -> Vec3 {
        body.position() + self.follow_offset_per_radius * body.descriptor.display_radius
    }

    fn transition(&self, camera: &OrbitCamera, to: CameraPose) -> CameraTween {
        CameraTween::new(camera.pose, to, self.transition_seconds, self.easing)
    }

    /// Focus a body. The star gets a static view; planets are followed.
    /// Unknown ids are ignored.
    pub fn select<O: InfoOverlay + ?Sized>(
        &mut self,
        id: BodyId,
        registry: &BodyRegistry,
        camera: &OrbitCamera,
        transitions: &mut CameraTransitions,
        overlay: &mut O,
    ) {
        let Some(body) = registry.get(id) else {
            log::debug!("focus request for unknown body id {}", id.0);
            return;
        };

        let goal = if body.descriptor.is_star() {
            self.state = FocusState::FocusedStatic { body: id };
            CameraPose::new(body.position() + self.sun_view_offset, body.position())
        } else {
            self.state = FocusState::FocusedFollowing { body: id };
            CameraPose::new(self.follow_target(body), body.position())
        };
        overlay.show_info(&body.descriptor);
        transitions.start(self.transition(camera, goal));

        log::debug!("focus -> {:?} ({})", self.state, body.name());
    }

    /// Drop the focus, hide the overlay and glide back to the overview pose.
    /// The free-orbit parameters return to their defaults immediately.
    pub fn reset<O: InfoOverlay + ?Sized>(
        &mut self,
        camera: &mut OrbitCamera,
        transitions: &mut CameraTransitions,
        overlay: &mut O,
    ) {
        self.state = FocusState::Idle;
        overlay.hide_info();

        camera.reset_spherical();
        let home = camera.spherical_pose();
        transitions.start(self.transition(camera, home));

        log::debug!("focus -> Idle");
    }

    /// Per-tick camera update. `transition_owned` is true when a transition
    /// already wrote the pose this tick.
    pub fn track(&self, transition_owned: bool, registry: &BodyRegistry, camera: &mut OrbitCamera) {
        match self.state {
            FocusState::FocusedFollowing { body } => {
                let Some(body) = registry.get(body) else {
                    return;
                };
                if !transition_owned {
                    camera.smooth_toward(self.follow_target(body), self.smoothing);
                }
                camera.pose.look_at = body.position();
            }
            FocusState::FocusedStatic { .. } => {}
            FocusState::Idle => {
                if !transition_owned {
                    camera.sync_from_spherical();
                }
            }
        }
    }
}
