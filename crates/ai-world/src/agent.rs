//! The owning entity's mutable body state.

use ai_core::{EntityId, Vec3};
use rustc_hash::FxHashSet;

use crate::LifeState;

/// Mutable body state of the agent that owns a scheduler.
///
/// Exactly one scheduler borrows this mutably during the agent's tick;
/// between ticks the host physics/locomotion step reads the control fields
/// (`walk_vector`, `forward`) and writes back the sensed flags (`on_ground`,
/// `swimming`, `collided_horizontally`).
#[derive(Clone, Debug)]
pub struct AgentState {
    /// This agent's own world id — world queries can return the agent
    /// itself, and eligibility predicates filter it out by this.
    pub id: EntityId,

    pub pos: Vec3,

    /// Current heading in radians, kept within one full turn by the
    /// behaviors that steer it.
    pub yaw: f32,

    /// Desired motion for the host locomotion step, already scaled by the
    /// active behavior's move speed.
    pub walk_vector: Vec3,

    /// Forward-motion control flag.
    pub forward: bool,

    // ── Sensed by the host each physics step ──────────────────────────────
    pub on_ground: bool,
    pub swimming: bool,
    pub collided_horizontally: bool,

    pub alive: bool,
    pub life_state: LifeState,

    /// Breeding-generation counter.  Older lineages are harder to scare —
    /// flee eligibility scales its detection radius down with this.
    pub generation: u32,

    /// Active emotion states, e.g. `"aggressiveondamage"`.
    pub emotion_states: FxHashSet<String>,

    /// Named activity windows currently running, e.g. `"invulnerable"`.
    pub activities: FxHashSet<String>,
}

impl AgentState {
    /// A living agent at `pos` with default attributes.
    pub fn new(id: EntityId, pos: Vec3) -> Self {
        Self {
            id,
            pos,
            yaw: 0.0,
            walk_vector: Vec3::ZERO,
            forward: false,
            on_ground: false,
            swimming: false,
            collided_horizontally: false,
            alive: true,
            life_state: LifeState::Active,
            generation: 0,
            emotion_states: FxHashSet::default(),
            activities: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn has_emotion_state(&self, state: &str) -> bool {
        self.emotion_states.contains(state)
    }

    #[inline]
    pub fn is_activity_running(&self, activity: &str) -> bool {
        self.activities.contains(activity)
    }
}
