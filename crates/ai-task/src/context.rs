//! Borrows threaded through every task callback.

use ai_core::EntityRng;
use ai_world::{AgentState, MoveDriver, WorldView};

/// Everything a task may touch during one callback.
///
/// Built fresh by the host for each scheduler call; all borrows last for
/// that call only.  The split keeps ownership honest: the agent's body and
/// mover are exclusively borrowed (tasks steer and request movement), the
/// world is shared read-only, and the RNG is the agent's own deterministic
/// stream.
pub struct TaskCtx<'a> {
    /// The owning entity's mutable body state.
    pub agent: &'a mut AgentState,

    /// Read-only world queries (nearest entity, light, terrain, clock).
    pub world: &'a dyn WorldView,

    /// The agent's movement driver.
    pub mover: &'a mut dyn MoveDriver,

    /// The agent's deterministic RNG stream.
    pub rng: &'a mut EntityRng,
}

impl<'a> TaskCtx<'a> {
    #[inline]
    pub fn new(
        agent: &'a mut AgentState,
        world: &'a dyn WorldView,
        mover: &'a mut dyn MoveDriver,
        rng:   &'a mut EntityRng,
    ) -> Self {
        Self { agent, world, mover, rng }
    }
}
