use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicU64;
use std::fmt;

/// A unique identifier for an [Entity](crate::entities::Entity).
///
/// Ids are handed out by an [IdAllocator]; among all entities drawing from the same
/// allocator they are unique and increase monotonically in allocation order.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct EntityId {
	value: u64,
}

impl EntityId {
	/// The raw numeric value of the id.
	#[inline(always)]
	pub const fn value(&self) -> u64 {
		self.value
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value)
	}
}

/// Hands out [EntityIds](EntityId), starting from 1.
///
/// Every [World](crate::world::World) owns one, shared as an
/// [Arc](std::sync::Arc); handing the same allocator to several worlds keeps
/// ids unique across all of them.
#[derive(Default)]
pub struct IdAllocator {
	next: AtomicU64,
}

impl IdAllocator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates the next id. Never yields the same value twice.
	pub fn allocate(&self) -> EntityId {
		EntityId {
			value: self.next.fetch_add(1, Relaxed) + 1,
		}
	}
}
