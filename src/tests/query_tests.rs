use crate::components::{Component, ComponentKind};
use crate::world::World;
use crate::component_kinds;
use std::sync::Arc;
use rand::thread_rng;
use rand::Rng;

#[derive(Component)]
struct Talk {
	text: &'static str,
}

#[derive(Component)]
struct Position {
	x: f32,
	y: f32,
}

#[derive(Component)]
struct Health {
	amount: i32,
}

mod first {
	use crate::components::Component;

	#[derive(Component)]
	pub struct Marker;
}

mod second {
	use crate::components::Component;

	#[derive(Component)]
	pub struct Marker;
}

fn talk() -> Arc<dyn Component> {
	Arc::new(Talk { text: "..." })
}

fn position() -> Arc<dyn Component> {
	Arc::new(Position { x: 0.0, y: 0.0 })
}

fn health() -> Arc<dyn Component> {
	Arc::new(Health { amount: 100 })
}

#[test]
pub fn single_kind_queries_match_exactly() {
	let world = World::new();

	let talker = world.create_entity();
	talker.add_components([talk()]);

	let mover = world.create_entity();
	mover.add_components([position()]);

	let both = world.create_entity();
	both.add_components([talk(), position()]);

	world.create_entity();

	let matched = world.entities_with_kind(ComponentKind::of::<Talk>());
	let matched_ids = matched.iter().map(|e| e.id()).collect::<Vec<_>>();
	assert_eq!(
		[talker.id(), both.id()].as_slice(),
		matched_ids.as_slice(),
		"Matches should be exact and keep registration order"
	);
}

#[test]
pub fn randomized_populations_match_their_expected_subsets() {
	let world = World::new();
	let mut rng = thread_rng();

	let mut expect_talk = Vec::new();
	let mut expect_both = Vec::new();

	for _ in 0..64 {
		let entity = world.create_entity();
		let with_talk = rng.gen_bool(0.5);
		let with_position = rng.gen_bool(0.5);

		if with_talk {
			entity.add_components([talk()]);
			expect_talk.push(entity.id());
		}
		if with_position {
			entity.add_components([position()]);
		}
		if with_talk && with_position {
			expect_both.push(entity.id());
		}
	}

	let talk_ids = world
		.entities_with_kind(ComponentKind::of::<Talk>())
		.iter()
		.map(|e| e.id())
		.collect::<Vec<_>>();
	assert_eq!(
		expect_talk, talk_ids,
		"Single kind matches do not line up with the attached components"
	);

	let both_ids = world
		.entities_with_all_kinds(component_kinds!([Talk, Position]))
		.iter()
		.map(|e| e.id())
		.collect::<Vec<_>>();
	assert_eq!(
		expect_both, both_ids,
		"All kinds matches do not line up with the attached components"
	);
}

#[test]
pub fn all_kinds_queries_require_every_kind() {
	let world = World::new();

	let complete = world.create_entity();
	complete.add_components([talk(), position(), health()]);

	let partial = world.create_entity();
	partial.add_components([talk(), health()]);

	let matched = world.entities_with_all_kinds(component_kinds!([Talk, Position, Health]));
	assert_eq!(1, matched.len());
	assert_eq!(complete.id(), matched[0].id());
}

#[test]
pub fn duplicate_kinds_in_a_query_are_redundant() {
	let world = World::new();

	let single = world.create_entity();
	single.add_components([talk()]);

	let stacked = world.create_entity();
	stacked.add_components([position(), position()]);

	let matched = world.entities_with_all_kinds(component_kinds!([Talk, Talk]));
	assert_eq!(
		1,
		matched.len(),
		"One component should satisfy a kind no matter how often the query repeats it"
	);
	assert_eq!(single.id(), matched[0].id());

	let matched = world.entities_with_all_kinds(component_kinds!([Talk, Position]));
	assert!(
		matched.is_empty(),
		"Stacking several components of one kind should not stand in for a missing kind"
	);
}

#[test]
pub fn empty_queries_match_nothing() {
	let world = World::new();
	world.create_entity().add_components([talk()]);
	world.create_entity().add_components([position()]);

	assert!(world.entities_with_all_kinds(&[]).is_empty());
}

#[test]
pub fn kinds_with_the_same_name_stay_distinct() {
	let first = ComponentKind::of::<first::Marker>();
	let second = ComponentKind::of::<second::Marker>();

	assert_ne!(first, second, "Each type should get its own kind");
	assert_eq!("Marker", first.name());
	assert_eq!("Marker", second.name());

	let world = World::new();
	let entity = world.create_entity();
	entity.add_components([Arc::new(first::Marker) as Arc<dyn Component>]);

	assert_eq!(1, world.entities_with_kind(first).len());
	assert!(
		world.entities_with_kind(second).is_empty(),
		"A kind should never match a component of another type with the same name"
	);
}

#[test]
pub fn query_results_expose_component_data() {
	let world = World::new();
	let entity = world.create_entity();
	entity.add_components([
		Arc::new(Talk { text: "status" }) as Arc<dyn Component>,
		Arc::new(Position { x: 4.0, y: 2.0 }),
		Arc::new(Health { amount: 7 }),
	]);

	let matched = world.entities_with_all_kinds(component_kinds!([Talk, Position, Health]));
	assert_eq!(1, matched.len());

	let components = matched[0].components();
	let talk = components[0].as_any().downcast_ref::<Talk>().unwrap();
	let position = components[1].as_any().downcast_ref::<Position>().unwrap();
	let health = components[2].as_any().downcast_ref::<Health>().unwrap();
	assert_eq!("status", talk.text);
	assert_eq!((4.0, 2.0), (position.x, position.y));
	assert_eq!(7, health.amount);
}

#[test]
pub fn unmatched_kinds_yield_no_entities() {
	let world = World::new();
	world.create_entity().add_components([talk()]);

	assert!(world.entities_with_kind(ComponentKind::of::<Health>()).is_empty());
	assert_eq!(1, world.entity_count());
}
