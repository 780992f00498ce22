/// Build a slice of [ComponentKinds](crate::components::ComponentKind) from a list of
/// component types, ready to pass to [add_system](crate::world::World::add_system) or
/// the [World](crate::world::World) query methods.
#[macro_export]
macro_rules! component_kinds {
    ([$($t: ty),*]) => {
		&[
			$($crate::components::ComponentKind::of::<$t>()),*
		]
	};
}
