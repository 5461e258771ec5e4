//! The read-only world-query interface and an in-memory reference world.

use ai_core::{EntityId, SimClock, Vec3};

use crate::EntitySnapshot;

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Read-only queries a behavior task may ask of the host world.
///
/// All methods are synchronous and must be cheap enough to call from
/// per-tick eligibility probes across thousands of agents.  Results are
/// owned snapshots — see [`EntitySnapshot`] for the re-resolution contract.
pub trait WorldView {
    /// Nearest entity to `origin` within a horizontal radius of `range_h`
    /// and a vertical radius of `range_v` that satisfies `predicate`.
    ///
    /// Returns `None` when nothing matches.  The predicate has already been
    /// applied to the returned entity.
    fn nearest_entity(
        &self,
        origin: Vec3,
        range_h: f64,
        range_v: f64,
        predicate: &dyn Fn(&EntitySnapshot) -> bool,
    ) -> Option<EntitySnapshot>;

    /// Resolve a cached id to a fresh snapshot, or `None` if the entity no
    /// longer exists.
    fn entity(&self, id: EntityId) -> Option<EntitySnapshot>;

    /// Current ambient daylight strength in `[0, 1]`.
    fn day_light(&self) -> f32;

    /// Terrain surface height at the given horizontal position.
    fn terrain_height(&self, x: f64, z: f64) -> f64;

    /// Milliseconds of simulation time since the world started.
    fn elapsed_ms(&self) -> u64;
}

// ── StaticWorld ───────────────────────────────────────────────────────────────

/// A flat in-memory world: an entity list, a uniform light level, a uniform
/// terrain height, and a [`SimClock`].
///
/// This is the reference implementation used by tests and demos; hosts with
/// a real world implement [`WorldView`] over their own spatial structures.
pub struct StaticWorld {
    pub entities: Vec<EntitySnapshot>,
    pub day_light: f32,
    pub terrain_height: f64,
    pub clock: SimClock,
}

impl Default for StaticWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticWorld {
    /// An empty world in full daylight at terrain height 0.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            day_light: 1.0,
            terrain_height: 0.0,
            clock: SimClock::new(),
        }
    }

    /// Add an entity and return its id.
    pub fn add(&mut self, entity: EntitySnapshot) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Mutable access to an entity, for scripting scenarios (move the
    /// threat, kill it, switch its game mode).
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntitySnapshot> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Remove an entity entirely (despawn).
    pub fn remove(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }
}

impl WorldView for StaticWorld {
    fn nearest_entity(
        &self,
        origin: Vec3,
        range_h: f64,
        range_v: f64,
        predicate: &dyn Fn(&EntitySnapshot) -> bool,
    ) -> Option<EntitySnapshot> {
        self.entities
            .iter()
            .filter(|e| {
                let dx = e.pos.x - origin.x;
                let dz = e.pos.z - origin.z;
                let dy = (e.pos.y - origin.y).abs();
                dx * dx + dz * dz <= range_h * range_h && dy <= range_v
            })
            .filter(|e| predicate(e))
            .min_by(|a, b| {
                let da = a.pos.square_distance_to(origin);
                let db = b.pos.square_distance_to(origin);
                da.total_cmp(&db)
            })
            .cloned()
    }

    fn entity(&self, id: EntityId) -> Option<EntitySnapshot> {
        self.entities.iter().find(|e| e.id == id).cloned()
    }

    fn day_light(&self) -> f32 {
        self.day_light
    }

    fn terrain_height(&self, _x: f64, _z: f64) -> f64 {
        self.terrain_height
    }

    fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }
}
