use crate::components::{Component, ComponentKind};
use crate::entities::{EntityId, IdAllocator};
use parking_lot::RwLock;
use std::sync::Arc;
use std::fmt;

/// A unique identity plus the ordered list of [components](Component) attached to it.
///
/// Entities are shared as `Arc<Entity>` between the [World](crate::world::World) and the
/// [systems](crate::systems::System) it schedules, so all mutating methods take `&self`;
/// the component list is guarded by its own reader-writer lock, independent of any world.
pub struct Entity {
	id: EntityId,
	components: RwLock<Vec<Arc<dyn Component>>>,
}

impl Entity {
	/// Creates an entity with no components, drawing its id from `ids`.
	pub fn new(ids: &IdAllocator) -> Self {
		Self {
			id: ids.allocate(),
			components: RwLock::new(Vec::new()),
		}
	}

	/// The entity's id. Assigned at construction, never changed afterwards.
	#[inline(always)]
	pub fn id(&self) -> EntityId {
		self.id
	}

	/// An owned snapshot of the attached components, in insertion order.
	///
	/// The snapshot stays valid while other threads keep mutating the entity;
	/// it simply stops reflecting their changes.
	pub fn components(&self) -> Vec<Arc<dyn Component>> {
		self.components.read().clone()
	}

	/// How many components are currently attached.
	pub fn component_count(&self) -> usize {
		self.components.read().len()
	}

	/// Appends `components` to the entity, preserving argument order.
	/// Nothing prevents attaching several components of the same kind.
	pub fn add_components(&self, components: impl IntoIterator<Item = Arc<dyn Component>>) {
		self.components.write().extend(components);
	}

	/// Detaches components by identity: for each element of `components`, the first
	/// attached `Arc` pointing to the same instance is removed and the rest shift left.
	/// Instances that are not attached are silently skipped.
	///
	/// Identity means the exact `Arc`, not the kind; a freshly built component of the
	/// same kind and value removes nothing.
	pub fn remove_components(&self, components: &[Arc<dyn Component>]) {
		let mut list = self.components.write();
		for component in components {
			if let Some(index) = list.iter().position(|c| Arc::ptr_eq(c, component)) {
				list.remove(index);
			}
		}
	}

	/// Whether at least one attached component has the given kind.
	pub fn has_kind(&self, kind: ComponentKind) -> bool {
		self.components.read().iter().any(|c| c.kind() == kind)
	}

	/// Whether every kind in `kinds` is present among the attached components.
	///
	/// Kinds count once each: repeating a kind in `kinds` demands nothing extra, and
	/// several attached components of one kind satisfy it no better than one does.
	/// An empty `kinds` is vacuously true; the [World](crate::world::World) query
	/// methods never get that far.
	pub fn has_all_kinds(&self, kinds: &[ComponentKind]) -> bool {
		let list = self.components.read();
		kinds.iter().all(|kind| list.iter().any(|c| c.kind() == *kind))
	}
}

impl fmt::Debug for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let list = self.components.read();
		f.debug_struct("Entity")
			.field("id", &self.id)
			.field("components", &list.iter().map(|c| c.name()).collect::<Vec<_>>())
			.finish()
	}
}
