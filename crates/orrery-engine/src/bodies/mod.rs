pub mod catalog;
pub mod descriptor;
pub mod registry;

pub use catalog::{default_solar_system, BodyCatalog};
pub use descriptor::{orbit_position, BodyDescriptor, BodyKind, BodyState, Fact};
pub use registry::{Body, BodyRegistry, INITIAL_SPACING_DIVISOR};
