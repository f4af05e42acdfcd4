pub mod api;
pub mod bodies;
pub mod bridge;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

#[cfg(test)]
mod test_utils;

// Re-export key types at crate root for convenience
pub use api::collaborators::{InfoOverlay, RayPicker, SceneSink};
pub use api::config::SimConfig;
pub use api::types::{BodyId, CameraPose};
pub use bodies::{default_solar_system, Body, BodyCatalog, BodyDescriptor, BodyKind, BodyRegistry, BodyState, Fact};
pub use bridge::{FrameBuffer, FrameLayout, FrameStatus};
pub use core::context::SimContext;
pub use error::{OrreryError, Result};
pub use extensions::{CameraTransitions, CameraTween, Easing};
pub use input::{InputEvent, InputQueue, InputRouter, Intent};
pub use renderer::camera::OrbitCamera;
pub use systems::focus::{FocusMachine, FocusState};
pub use systems::orbit::OrbitUpdater;
pub use systems::picking::SpherePicker;
