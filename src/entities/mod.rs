//! [Entities](Entity) represent the individual "things" in your simulation.
//!
//! An [Entity] has no behaviour of its own;
//! it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! All behaviour comes from the [systems](crate::systems::System) a
//! [World](crate::world::World) runs over them.

mod entity;
mod id_allocator;

pub use entity::*;
pub use id_allocator::*;
