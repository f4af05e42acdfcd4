pub mod camera;

pub use camera::{OrbitCamera, OrbitDefaults};
