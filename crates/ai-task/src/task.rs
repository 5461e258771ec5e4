//! The `AiTask` trait — the contract every behavior implements.

use std::fmt;

use ai_core::EntityId;
use ai_world::LifeState;

use crate::{TaskCtx, TaskKind};

// ── NotifyEvent ───────────────────────────────────────────────────────────────

/// An out-of-band event fanned out to all of an agent's tasks.
///
/// Keys are free-form strings agreed between host and behaviors; `"hurt"`
/// is the one the reference behaviors react to.
#[derive(Clone, Debug)]
pub struct NotifyEvent {
    pub key: String,

    /// The entity that caused the event, when there is one (the attacker
    /// for `"hurt"`).
    pub source: Option<EntityId>,
}

impl NotifyEvent {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), source: None }
    }

    pub fn hurt(source: EntityId) -> Self {
        Self { key: "hurt".to_string(), source: Some(source) }
    }
}

// ── AiTask ────────────────────────────────────────────────────────────────────

/// One schedulable behavior: eligibility probe, lifecycle, metadata.
///
/// # State machine
///
/// **Idle** → (`should_execute` passes, slot won) → `start_execute` →
/// **Active** → (`continue_execute` returns `false`, or the slot is lost)
/// → `finish_execute` → **Idle**.
///
/// # Contract
///
/// - `should_execute` is called only while Idle, every tick, for every
///   task.  Keep it cheap.  Its only permitted side effect is caching a
///   prospective target for an immediately-following `start_execute`.
/// - `start_execute` must be safe after an abnormal interruption: reset all
///   per-run state (timers, stuck flags) rather than assuming the previous
///   run finished cleanly.
/// - `continue_execute` must re-validate its preconditions every call; the
///   world changes between ticks.
/// - `finish_execute` releases external resources (stops movement) on both
///   the natural (`cancelled = false`) and preempted (`cancelled = true`)
///   paths.
/// - No method may block, and no method may let an internal fault escape:
///   degrade to returning `false`.
///
/// Metadata (`kind`, `slot`, `priority`, `priority_for_cancel`) must be
/// constant once the task is handed to a scheduler.
pub trait AiTask: Send {
    /// Which behavior this is.  Used for forced stops and diagnostics.
    fn kind(&self) -> TaskKind;

    /// The execution channel this task competes for.
    fn slot(&self) -> usize;

    /// Priority presented while Idle, when bidding for the slot.
    fn priority(&self) -> f32;

    /// Priority presented to *other* tasks while Active.  Returning more
    /// than [`priority`][Self::priority] makes a running task harder to
    /// displace than it was to start.
    fn priority_for_cancel(&self) -> f32 {
        self.priority()
    }

    /// Eligibility probe, Idle only.
    fn should_execute(&mut self, ctx: &mut TaskCtx<'_>) -> bool;

    /// Idle → Active.
    fn start_execute(&mut self, ctx: &mut TaskCtx<'_>);

    /// Advance one tick; `false` requests retirement.
    fn continue_execute(&mut self, ctx: &mut TaskCtx<'_>, dt: f32) -> bool;

    /// Active → Idle.  `cancelled` is `true` when preempted or force-stopped.
    fn finish_execute(&mut self, ctx: &mut TaskCtx<'_>, cancelled: bool);

    /// Out-of-band event hint; safe while Idle or Active.  Returning `true`
    /// asks the scheduler to activate this task immediately, subject to the
    /// normal priority rule.
    fn notify(&mut self, _ctx: &mut TaskCtx<'_>, _event: &NotifyEvent) -> bool {
        false
    }

    /// The host flipped the agent's [`LifeState`]; `before` is the prior
    /// value.  Best-effort, no return.
    fn on_state_changed(&mut self, _before: LifeState) {}

    /// The agent was newly spawned into the world.
    fn on_entity_spawn(&mut self) {}

    /// The agent was loaded from the host's save data.
    fn on_entity_loaded(&mut self) {}
}

impl fmt::Debug for dyn AiTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiTask")
            .field("kind", &self.kind())
            .field("slot", &self.slot())
            .field("priority", &self.priority())
            .finish()
    }
}
