//! The [World] is the container tying [entities](crate::entities::Entity) and
//! [systems](crate::systems::System) together and driving the per-tick schedule.

mod query;
mod scheduler;

use crate::entities::{Entity, EntityId, IdAllocator};
use crate::systems::{System, SystemRegistration};
use crate::components::ComponentKind;
use crate::error::WorldError;
use parking_lot::RwLock;
use std::sync::Arc;

/// A container for [`entities`](Entity) and [`systems`](System).
///
/// The world keeps both in registration order behind one reader-writer lock. Reads
/// (queries, lookups, counts) run concurrently; registration and removal take the
/// lock exclusively. [update](World::update) holds a read lock for the whole tick,
/// so systems may add or remove *components* on the entities they are handed, but
/// must never call back into the registration methods of the world that is ticking
/// them. Read-only calls from inside a tick are fine.
pub struct World {
	ids: Arc<IdAllocator>,
	state: RwLock<WorldState>,
}

#[derive(Default)]
struct WorldState {
	entities: Vec<Arc<Entity>>,
	systems: Vec<SystemRegistration>,
}

impl World {
	/// Creates an empty world with its own [IdAllocator].
	pub fn new() -> Self {
		Self::with_ids(Arc::new(IdAllocator::new()))
	}

	/// Creates an empty world drawing its [EntityIds](EntityId) from `ids`.
	///
	/// Worlds sharing one allocator never hand out the same id twice between them.
	pub fn with_ids(ids: Arc<IdAllocator>) -> Self {
		Self {
			ids,
			state: RwLock::new(WorldState::default()),
		}
	}

	/// The allocator this world draws [EntityIds](EntityId) from.
	///
	/// Hand it to [Entity::new] to build entities before registering them, or share it
	/// between worlds to keep ids unique across all of them.
	pub fn ids(&self) -> Arc<IdAllocator> {
		self.ids.clone()
	}

	/// Allocates, registers and returns a fresh entity with no components.
	pub fn create_entity(&self) -> Arc<Entity> {
		let entity = Arc::new(Entity::new(&self.ids));
		self.add_entity(entity.clone());
		entity
	}

	/// Registers an existing entity. Entities keep their registration order; nothing
	/// prevents registering the same entity twice, it will then match queries twice.
	pub fn add_entity(&self, entity: Arc<Entity>) {
		self.state.write().entities.push(entity);
	}

	/// Unregisters an entity by identity: the first registered `Arc` pointing to the
	/// same instance is removed and later entities shift left. Removing an entity
	/// that was never added is a silent no-op.
	pub fn remove_entity(&self, entity: &Arc<Entity>) {
		let mut state = self.state.write();
		if let Some(index) = state.entities.iter().position(|e| Arc::ptr_eq(e, entity)) {
			state.entities.remove(index);
		}
	}

	/// Finds a registered entity by id.
	pub fn get_entity_by_id(&self, id: EntityId) -> Result<Arc<Entity>, WorldError> {
		self.state
			.read_recursive()
			.entities
			.iter()
			.find(|e| e.id() == id)
			.cloned()
			.ok_or(WorldError::EntityNotFound(id))
	}

	/// Add a new [system](System) to the [World], to be run each tick over the
	/// entities matching `kinds`.
	///
	/// Registering with zero kinds is allowed: the system still runs every tick,
	/// always over an empty entity slice.
	pub fn add_system<T: 'static + System>(&self, system: T, kinds: &[ComponentKind]) {
		let registration = SystemRegistration::new(Arc::new(system), kinds.into());
		self.state.write().systems.push(registration);
	}

	/// Registered entities holding at least one component of `kind`, in registration order.
	pub fn entities_with_kind(&self, kind: ComponentKind) -> Vec<Arc<Entity>> {
		query::with_kind(&self.state.read_recursive().entities, kind)
	}

	/// Registered entities holding every distinct kind in `kinds`, in registration order.
	///
	/// Duplicate kinds in `kinds` are redundant, and entities stacking several
	/// components of one kind get no credit for the extras. An empty `kinds`
	/// matches no entities.
	pub fn entities_with_all_kinds(&self, kinds: &[ComponentKind]) -> Vec<Arc<Entity>> {
		query::with_all_kinds(&self.state.read_recursive().entities, kinds)
	}

	/// How many entities are currently registered.
	pub fn entity_count(&self) -> usize {
		self.state.read_recursive().entities.len()
	}

	/// How many systems are currently registered.
	pub fn system_count(&self) -> usize {
		self.state.read_recursive().systems.len()
	}

	/// Execute all [systems](System) once, in ascending priority order.
	///
	/// Systems sharing a priority level run concurrently and the next level only
	/// starts once the previous one has completely finished; `dt` is passed through
	/// to every system untouched. A tick with no systems does nothing.
	///
	/// If a system panics, the panic is resumed here after its level has finished.
	pub fn update(&self, dt: f64) {
		let state = self.state.read();
		scheduler::run_tick(dt, &state.entities, &state.systems);
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}
