pub mod frame;
pub mod protocol;

pub use frame::{FrameBuffer, FrameStatus};
pub use protocol::{BodyRecord, CameraRecord, FrameLayout};
