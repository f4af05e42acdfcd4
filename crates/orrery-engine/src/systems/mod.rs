pub mod focus;
pub mod orbit;
pub mod picking;

#[cfg(test)]
mod proptest_orbit;

pub use focus::{FocusMachine, FocusState};
pub use orbit::{advance, push_transforms, OrbitUpdater};
pub use picking::{ray_sphere, SpherePicker};
