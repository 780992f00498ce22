use crate::components::ComponentKind;
use crate::entities::Entity;
use std::sync::Arc;

/// Entities holding at least one component of `kind`, in registration order.
pub(crate) fn with_kind(entities: &[Arc<Entity>], kind: ComponentKind) -> Vec<Arc<Entity>> {
	entities.iter().filter(|e| e.has_kind(kind)).cloned().collect()
}

/// Entities holding every distinct kind in `kinds`, in registration order.
/// An empty `kinds` matches no entities.
pub(crate) fn with_all_kinds(entities: &[Arc<Entity>], kinds: &[ComponentKind]) -> Vec<Arc<Entity>> {
	if kinds.is_empty() {
		return Vec::new();
	}

	entities.iter().filter(|e| e.has_all_kinds(kinds)).cloned().collect()
}

/// Dispatch on query arity: a single kind takes the short-circuiting single-kind
/// path, every other arity (zero included) the all-kinds path.
pub(crate) fn for_kinds(entities: &[Arc<Entity>], kinds: &[ComponentKind]) -> Vec<Arc<Entity>> {
	if kinds.len() == 1 {
		with_kind(entities, kinds[0])
	} else {
		with_all_kinds(entities, kinds)
	}
}
