use crate::components::ComponentKind;
use crate::systems::System;
use std::sync::Arc;

/// A [System] paired with the component kinds it asked for, captured by
/// [add_system](crate::world::World::add_system) and never mutated afterwards.
pub struct SystemRegistration {
	system: Arc<dyn System>,
	kinds: Box<[ComponentKind]>,
}

impl SystemRegistration {
	pub(crate) fn new(system: Arc<dyn System>, kinds: Box<[ComponentKind]>) -> Self {
		Self { system, kinds }
	}

	pub fn system(&self) -> &Arc<dyn System> {
		&self.system
	}

	/// The registered query: the kinds an entity must carry to be handed to this system.
	pub fn kinds(&self) -> &[ComponentKind] {
		&self.kinds
	}
}
