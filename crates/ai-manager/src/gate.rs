//! The externally-injectable execution gate.

use ai_task::AiTask;

/// Final say over whether an eligible task may start.
///
/// Consulted after a task wins its slot bid and passes `should_execute`;
/// a `false` leaves the current occupant (if any) untouched.  Hosts use
/// this for script-driven overrides: pausing a category of behaviors
/// without removing the tasks.
pub trait ExecutionGate: Send {
    fn allow(&self, task: &dyn AiTask) -> bool;
}

/// The default gate: everything may run.
pub struct AllowAll;

impl ExecutionGate for AllowAll {
    fn allow(&self, _task: &dyn AiTask) -> bool {
        true
    }
}

/// Plain functions and closures work as gates.
impl<F> ExecutionGate for F
where
    F: Fn(&dyn AiTask) -> bool + Send,
{
    fn allow(&self, task: &dyn AiTask) -> bool {
        self(task)
    }
}
