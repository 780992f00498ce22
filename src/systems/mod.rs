//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually added to a [World](crate::world::World)
//! for it to become active during the execution of the program.

mod system;
mod registration;

pub use system::*;
pub use registration::*;
