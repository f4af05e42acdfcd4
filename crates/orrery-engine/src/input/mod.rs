pub mod queue;
pub mod router;

pub use queue::{InputEvent, InputQueue};
pub use router::{InputRouter, Intent};
