// extensions/mod.rs
//
// Camera animation helpers. The simulation drives these; they know nothing
// about bodies or focus.

pub mod easing;
pub mod tween;

pub use easing::{ease_vec3, Easing};
pub use tween::{CameraTransitions, CameraTween, TransitionId};
