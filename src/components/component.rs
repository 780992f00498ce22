use crate::components::ComponentKind;
use std::any::Any;

/// A plain fragment of data that can be attached to an [Entity](crate::entities::Entity).
///
/// Components carry no behaviour of their own; the [World](crate::world::World) matches
/// them purely by [kind](ComponentKind) and never inspects their data. Implementations
/// normally come from #\[derive([`Component`])], which registers the kind and wires up
/// [ComponentKindInfo] as well.
pub trait Component: Send + Sync + 'static {
	/// The registered kind of this component. A pure function of the component's
	/// type, never of its instance data.
	fn kind(&self) -> ComponentKind;

	/// The display name this component's kind was registered under.
	/// Diagnostic only, never a matching key.
	fn name(&self) -> &'static str;

	/// Borrow the component as [Any], so systems can downcast it to its concrete type.
	fn as_any(&self) -> &dyn Any;
}

/// Kind lookup through a component's base type.
/// This trait should only be implemented by #\[derive([`Component`])].
pub trait ComponentKindInfo {
	/// The [ComponentKind] registered for this type.
	fn component_kind() -> ComponentKind;
}
