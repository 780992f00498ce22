use crate::entities::EntityId;
use thiserror::Error;

/// Errors surfaced by [World](crate::world::World) operations.
///
/// Only lookups can fail. Everything else that finds nothing to act on, like removing
/// an entity that was never added or querying kinds no entity carries, is a silent no-op.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
	/// No entity with this id is currently registered in the [World](crate::world::World).
	#[error("entity {0} does not exist")]
	EntityNotFound(EntityId),
}
