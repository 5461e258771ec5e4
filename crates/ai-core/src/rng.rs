//! Deterministic per-entity RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each entity gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (entity_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive entity ids uniformly across the seed space.
//! This means:
//!
//! - Entities never share RNG state, so one agent's behavior draws cannot
//!   perturb another's — runs replay identically for a given seed.
//! - Spawning or despawning entities does not disturb the streams of the
//!   entities that remain.
//!
//! Behavior tasks draw from the owning entity's `EntityRng` for every
//! probabilistic gate (execution chance, wander duration, turn rate), which
//! is what makes the scenario tests reproducible under a fixed seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EntityId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-entity deterministic RNG.
///
/// Create one per entity when the agent is constructed; the scheduler
/// threads `&mut EntityRng` through every task callback.  The type is
/// `!Sync` to prevent accidental sharing — an entity's RNG belongs to that
/// entity's tick alone.
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed and an entity id.
    pub fn new(global_seed: u64, entity: EntityId) -> Self {
        let seed = global_seed ^ entity.0.wrapping_mul(MIXING_CONSTANT);
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
