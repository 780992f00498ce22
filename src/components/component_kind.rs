//! A unique runtime identifier tied to a [Component](crate::components::Component) kind.
//!
//! Developers shouldn't rely on the numeric identity of [kinds](ComponentKind), as it is
//! not stable between program re-runs. Kinds are the only key the
//! [World](crate::world::World) matches entities and systems on; the display name a kind
//! was registered under is kept purely for diagnostics.

use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};
use std::any::TypeId;
use std::fmt;

use crate::components::ComponentKindInfo;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref KIND_NAMES: RwLock<Vec<&'static str>> = RwLock::new(Vec::new());
	static ref TYPE_TO_KIND: Mutex<HashMap<TypeId, ComponentKind, Hasher>> =
		Mutex::new(HashMap::default());
}

/// A globally unique identifier for a type implementing the
/// [`Component`](crate::components::Component) trait.
///
/// Two component types always get distinct kinds, even when they share a display name.
#[derive(Hash, Eq, PartialEq, Copy, Clone)]
pub struct ComponentKind {
	value: usize,
}

impl ComponentKind {
	/// Get the [ComponentKind] of the type `T`.
	#[inline(always)]
	pub fn of<T: ComponentKindInfo>() -> ComponentKind {
		T::component_kind()
	}

	/// The display name this kind was registered under.
	pub fn name(&self) -> &'static str {
		KIND_NAMES.read()[self.value]
	}
}

impl fmt::Debug for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ComponentKind({})", self.name())
	}
}

/// Registers `T` as a component kind under `name`. **Should not be called from user code.**
///
/// Registration is idempotent: repeated calls for the same `T` hand back the kind
/// allocated by the first call. To be called from code generated by
/// #\[derive([`Component`](crate::components::Component))].
pub fn register<T: 'static>(name: &'static str) -> ComponentKind {
	let mut ttk = TYPE_TO_KIND.lock();
	if let Some(kind) = ttk.get(&TypeId::of::<T>()) {
		return *kind;
	}

	let mut names = KIND_NAMES.write();
	let kind = ComponentKind { value: names.len() };
	names.push(name);
	ttk.insert(TypeId::of::<T>(), kind);
	kind
}
