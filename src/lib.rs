pub mod components;
pub mod entities;
pub mod systems;
pub mod world;
pub mod error;

// Lets code generated by #[derive(Component)] name this crate by its
// external name even when expanded inside the crate itself.
extern crate self as strata_ecs;

pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::world::World;
	pub use crate::error::WorldError;
	pub use crate::entities::{Entity, EntityId, IdAllocator};
	pub use crate::component_kinds;
}

#[cfg(test)]
mod tests;
