//! Spawner state resource.
//!
//! Holds the id counter and the random source used by
//! [`crate::systems::spawner`]. Seeding the generator makes a run fully
//! reproducible.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug)]
pub struct SpawnerState {
    next_id: u64,
    rng: fastrand::Rng,
}

impl SpawnerState {
    /// Create a spawner; `None` seeds from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        SpawnerState { next_id: 1, rng }
    }

    /// Hand out the next actor id. Ids are never reused, not even across a
    /// session reset.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform value in `[0, 1)`.
    pub fn roll(&mut self) -> f32 {
        self.rng.f32()
    }
}
