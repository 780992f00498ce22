use crate::entities::Entity;
use std::sync::Arc;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// Systems run concurrently with the other systems of their priority level, so they
/// take `&self`; any state a system keeps across ticks needs interior mutability
/// (a [Mutex](parking_lot::Mutex), an atomic) just like the components it touches.
pub trait System: Send + Sync {
	/// The priority level this system runs at. Lower levels run first and a level only
	/// starts once the previous one has completely finished. Ties run concurrently.
	///
	/// Must stay stable while the system is registered.
	fn priority(&self) -> i32 {
		0
	}

	/// Executes the system over one tick.
	///
	/// `entities` holds exactly the registered entities matching the kinds this system
	/// was [added](crate::world::World::add_system) with, in registration order,
	/// captured when the system's priority level started.
	fn update(&self, dt: f64, entities: &[Arc<Entity>]);

	/// The name used for this system in scheduler diagnostics.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}
