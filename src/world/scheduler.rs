use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use crate::systems::SystemRegistration;
use std::collections::BTreeMap;
use crate::entities::Entity;
use crate::world::query;
use std::time::Instant;
use std::sync::Arc;
use log::warn;

/// Advisory ceiling for a single system invocation. Anything slower gets logged.
const SLOW_UPDATE_MICROS: u128 = 1200;

/// Runs one tick of `systems` over `entities`.
///
/// Registrations are bucketed by [priority](crate::systems::System::priority) and the
/// buckets run in ascending order. At the start of each bucket every registration gets
/// its matching entity set computed; the bucket then fans out as one rayon task per
/// registration, and `for_each` only returns once the whole bucket has finished. That
/// join is the barrier between priority levels.
///
/// A panic inside a system is resumed on the calling thread once its level has joined,
/// so one faulting system never strands the others of its level mid-run.
pub(crate) fn run_tick(dt: f64, entities: &[Arc<Entity>], systems: &[SystemRegistration]) {
	let mut levels: BTreeMap<i32, Vec<&SystemRegistration>> = BTreeMap::new();
	for registration in systems {
		levels
			.entry(registration.system().priority())
			.or_default()
			.push(registration);
	}

	for (_, level) in levels {
		let batch: Vec<_> = level
			.into_iter()
			.map(|registration| (registration, query::for_kinds(entities, registration.kinds())))
			.collect();

		batch.into_par_iter().for_each(|(registration, matched)| {
			let started = Instant::now();
			registration.system().update(dt, &matched);

			let elapsed = started.elapsed().as_micros();
			if elapsed > SLOW_UPDATE_MICROS {
				warn!("updated {} in {}us", registration.system().name(), elapsed);
			}
		});
	}
}
