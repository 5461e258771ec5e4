//! `TaskManager` — slot table, per-tick arbitration, notify fan-out.

use std::fmt::Write as _;

use ai_task::{AiTask, NotifyEvent, TaskCtx, TaskKind};
use ai_world::LifeState;

use crate::{AllowAll, ExecutionGate, SchedulerError, SchedulerObserver, SchedulerResult};

/// Number of mutually-exclusive execution channels per agent.
pub const SLOT_COUNT: usize = 8;

/// The behavior task scheduler for one agent.
///
/// Owns the agent's tasks (insertion order is the deterministic same-tick
/// tie-break) and the slot table mapping each execution channel to at most
/// one active task.  Created with the agent, dropped with the agent; see
/// the [crate docs][crate] for the tick algorithm.
///
/// The slot table stores indices into the task list, so "at most one
/// occupant per slot" is structural: a slot is a single `Option`.
pub struct TaskManager {
    tasks: Vec<Box<dyn AiTask>>,
    active_by_slot: [Option<usize>; SLOT_COUNT],
    gate: Box<dyn ExecutionGate>,
    debug_enabled: bool,
    debug_summary: String,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    /// A manager that lets every eligible task run.
    pub fn new() -> Self {
        Self::with_gate(Box::new(AllowAll))
    }

    /// A manager with an externally-supplied execution gate.
    pub fn with_gate(gate: Box<dyn ExecutionGate>) -> Self {
        Self {
            tasks: Vec::new(),
            active_by_slot: [None; SLOT_COUNT],
            gate,
            debug_enabled: false,
            debug_summary: String::new(),
        }
    }

    /// Enable or disable the per-tick [`debug_summary`][Self::debug_summary]
    /// rebuild.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }

    // ── Task list management ──────────────────────────────────────────────

    /// Append a task to the list.  Errors if the task names a slot outside
    /// the table; nothing becomes active until the next tick's arbitration.
    pub fn add_task(&mut self, task: Box<dyn AiTask>) -> SchedulerResult<()> {
        let slot = task.slot();
        if slot >= SLOT_COUNT {
            return Err(SchedulerError::SlotOutOfRange { slot, limit: SLOT_COUNT });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove every task of `kind` from the list; returns how many were
    /// removed.  Active instances are cancelled first — a slot must not
    /// outlive its occupant.
    pub fn remove_task(&mut self, kind: TaskKind, ctx: &mut TaskCtx<'_>) -> usize {
        for slot in 0..SLOT_COUNT {
            if let Some(i) = self.active_by_slot[slot] {
                if self.tasks[i].kind() == kind {
                    self.tasks[i].finish_execute(ctx, true);
                    self.active_by_slot[slot] = None;
                }
            }
        }

        let mut removed = 0;
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].kind() == kind {
                self.tasks.remove(i);
                removed += 1;
                // Occupant indices above the removal point shift down.
                for entry in self.active_by_slot.iter_mut().flatten() {
                    if *entry > i {
                        *entry -= 1;
                    }
                }
            } else {
                i += 1;
            }
        }
        removed
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// The task currently active in `slot`, if any.
    pub fn slot_occupant(&self, slot: usize) -> Option<&dyn AiTask> {
        let i = self.active_by_slot.get(slot).copied().flatten()?;
        Some(self.tasks[i].as_ref())
    }

    /// Whether any task of `kind` is currently active.
    pub fn is_active(&self, kind: TaskKind) -> bool {
        self.active_by_slot
            .iter()
            .flatten()
            .any(|&i| self.tasks[i].kind() == kind)
    }

    /// Number of occupied slots.
    pub fn active_count(&self) -> usize {
        self.active_by_slot.iter().flatten().count()
    }

    /// The debug string rebuilt every tick while the debug flag is set:
    /// `"fleeentity(2.5), wander(1)"`, or `"-"` when all slots are empty.
    pub fn debug_summary(&self) -> &str {
        &self.debug_summary
    }

    // ── Per-tick scheduling ───────────────────────────────────────────────

    /// Run one scheduler tick: arbitration, then advance.
    pub fn on_game_tick<O: SchedulerObserver>(
        &mut self,
        ctx: &mut TaskCtx<'_>,
        dt: f32,
        observer: &mut O,
    ) {
        // ── Phase 1: arbitration, in task-list order ──────────────────────
        for i in 0..self.tasks.len() {
            let slot = self.tasks[i].slot();
            let occupant = self.active_by_slot[slot];

            // An active task is never re-probed here; it only leaves its
            // slot by finishing or by losing it to a higher-priority bidder.
            if occupant == Some(i) {
                continue;
            }

            // Priority compare before the eligibility probe: a bid that
            // cannot win the slot skips its (possibly query-heavy) probe.
            let winnable = match occupant {
                None => true,
                Some(o) => self.tasks[i].priority() > self.tasks[o].priority_for_cancel(),
            };
            if !winnable {
                continue;
            }

            if !self.tasks[i].should_execute(ctx) {
                continue;
            }
            if !self.gate.allow(self.tasks[i].as_ref()) {
                continue;
            }

            self.install(slot, i, occupant, ctx, observer);
        }

        // ── Phase 2: advance every occupied slot ──────────────────────────
        //
        // Runs after arbitration so a task that started this tick also
        // gets its first continue_execute before the tick ends.
        for slot in 0..SLOT_COUNT {
            let Some(i) = self.active_by_slot[slot] else {
                continue;
            };
            if !self.tasks[i].continue_execute(ctx, dt) {
                self.tasks[i].finish_execute(ctx, false);
                self.active_by_slot[slot] = None;
                observer.on_task_finished(self.tasks[i].kind(), slot, false);
            }
        }

        if self.debug_enabled {
            self.rebuild_debug_summary();
        }
    }

    /// Fan an out-of-band event to every task, idle or active.  Tasks that
    /// answer `true` are promoted immediately through the same preemption
    /// rule as tick arbitration.
    pub fn notify<O: SchedulerObserver>(
        &mut self,
        ctx: &mut TaskCtx<'_>,
        event: &NotifyEvent,
        observer: &mut O,
    ) {
        for i in 0..self.tasks.len() {
            if !self.tasks[i].notify(ctx, event) {
                continue;
            }

            let slot = self.tasks[i].slot();
            let occupant = self.active_by_slot[slot];
            let winnable = match occupant {
                None => true,
                Some(o) => self.tasks[i].priority() > self.tasks[o].priority_for_cancel(),
            };
            if winnable {
                self.install(slot, i, occupant, ctx, observer);
            }
        }
    }

    /// Forced stop: cancel every active task of `kind` and clear its slot.
    /// Returns how many were stopped.
    pub fn stop_task<O: SchedulerObserver>(
        &mut self,
        kind: TaskKind,
        ctx: &mut TaskCtx<'_>,
        observer: &mut O,
    ) -> usize {
        let mut stopped = 0;
        for slot in 0..SLOT_COUNT {
            let Some(i) = self.active_by_slot[slot] else {
                continue;
            };
            if self.tasks[i].kind() == kind {
                self.tasks[i].finish_execute(ctx, true);
                self.active_by_slot[slot] = None;
                observer.on_task_finished(kind, slot, true);
                stopped += 1;
            }
        }
        stopped
    }

    // ── World/agent lifecycle fan-outs ────────────────────────────────────

    pub fn on_state_changed(&mut self, before: LifeState) {
        for task in &mut self.tasks {
            task.on_state_changed(before);
        }
    }

    pub fn on_entity_spawn(&mut self) {
        for task in &mut self.tasks {
            task.on_entity_spawn();
        }
    }

    pub fn on_entity_loaded(&mut self) {
        for task in &mut self.tasks {
            task.on_entity_loaded();
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Install `newcomer` into `slot`: cancel the displaced occupant first,
    /// then start the newcomer.  The displaced task's `finish_execute(true)`
    /// runs to completion before the newcomer's `start_execute` begins.
    fn install<O: SchedulerObserver>(
        &mut self,
        slot: usize,
        newcomer: usize,
        occupant: Option<usize>,
        ctx: &mut TaskCtx<'_>,
        observer: &mut O,
    ) {
        if let Some(o) = occupant {
            self.tasks[o].finish_execute(ctx, true);
            observer.on_task_finished(self.tasks[o].kind(), slot, true);
        }

        self.active_by_slot[slot] = Some(newcomer);
        self.tasks[newcomer].start_execute(ctx);
        observer.on_task_started(
            self.tasks[newcomer].kind(),
            slot,
            self.tasks[newcomer].priority(),
        );
    }

    fn rebuild_debug_summary(&mut self) {
        self.debug_summary.clear();
        let mut first = true;
        for i in self.active_by_slot.iter().flatten() {
            let task = &self.tasks[*i];
            if !first {
                self.debug_summary.push_str(", ");
            }
            let _ = write!(self.debug_summary, "{}({})", task.kind(), task.priority());
            first = false;
        }
        if first {
            self.debug_summary.push('-');
        }
    }
}
