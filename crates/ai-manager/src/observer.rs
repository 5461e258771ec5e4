//! Scheduler observer trait for start/finish notifications.

use ai_task::TaskKind;

/// Callbacks invoked by [`TaskManager`][crate::TaskManager] when a task
/// changes execution state.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.  Callbacks fire synchronously
/// inside the tick, after the state change they describe has completed.
pub trait SchedulerObserver {
    /// A task was installed into its slot and started.
    fn on_task_started(&mut self, _kind: TaskKind, _slot: usize, _priority: f32) {}

    /// A task left its slot.  `cancelled` is `true` for preemption and
    /// forced stops, `false` for natural completion.
    fn on_task_finished(&mut self, _kind: TaskKind, _slot: usize, _cancelled: bool) {}
}

/// A [`SchedulerObserver`] that does nothing.  Use when ticking a manager
/// without caring about transitions.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}
