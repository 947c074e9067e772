use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use atoll_common::{ActorId, Transform};

/// The authoritative actor state for the scene.
///
/// Every actor's transform lives here; behavior controllers mutate their
/// own actor through explicit operations and renderers only read. Uses
/// BTreeMap for deterministic iteration order across all platforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lagoon {
    actors: BTreeMap<ActorId, ActorData>,
    tick: u64,
}

/// Per-actor data stored in the lagoon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub transform: Transform,
}

impl Lagoon {
    /// Create an empty lagoon at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame counter.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of actors in the lagoon.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Read-only access to all actors (BTreeMap for deterministic iteration).
    pub fn actors(&self) -> &BTreeMap<ActorId, ActorData> {
        &self.actors
    }

    /// Spawn a new actor with the given transform. Returns its id.
    pub fn spawn(&mut self, transform: Transform) -> ActorId {
        let id = ActorId::new();
        self.actors.insert(id, ActorData { transform });
        id
    }

    /// Get a reference to actor data.
    pub fn get(&self, id: ActorId) -> Option<&ActorData> {
        self.actors.get(&id)
    }

    /// Get a mutable reference to actor data.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut ActorData> {
        self.actors.get_mut(&id)
    }

    /// Update an actor's transform. Returns false for an unknown actor.
    pub fn set_transform(&mut self, id: ActorId, new: Transform) -> bool {
        if let Some(data) = self.actors.get_mut(&id) {
            data.transform = new;
            true
        } else {
            false
        }
    }

    /// Advance the frame counter by one.
    pub fn step(&mut self) {
        self.tick += 1;
    }
}
