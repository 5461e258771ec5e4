//! `ai-manager` — the per-agent behavior task scheduler.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`manager`]  | `TaskManager` — task list, slot table, tick arbitration  |
//! | [`gate`]     | `ExecutionGate` collaborator, `AllowAll`                 |
//! | [`observer`] | `SchedulerObserver` callbacks, `NoopObserver`            |
//! | [`error`]    | `SchedulerError`, `SchedulerResult<T>`                   |
//!
//! # The two-phase tick
//!
//! [`TaskManager::on_game_tick`] runs once per agent per simulation tick:
//!
//! 1. **Arbitration** — in task-list order, every idle task bids for its
//!    slot.  A bid wins when the slot is empty or the bidder's `priority`
//!    strictly exceeds the occupant's `priority_for_cancel`, the bidder's
//!    `should_execute` passes, and the execution gate accepts.  The loser
//!    is cancelled *before* the winner starts.
//! 2. **Advance** — every occupied slot gets `continue_execute(dt)`; a
//!    `false` return retires the task and clears the slot.
//!
//! Arbitration fully completes before advance, so a task that started this
//! tick also advances this tick.  Task-list insertion order is the only
//! tie-break between same-tick bidders.
//!
//! The scheduler itself never fails: every task-supplied answer is just a
//! boolean decision point, and any task may decline to run or to continue
//! at any time.

pub mod error;
pub mod gate;
pub mod manager;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SchedulerError, SchedulerResult};
pub use gate::{AllowAll, ExecutionGate};
pub use manager::{TaskManager, SLOT_COUNT};
pub use observer::{NoopObserver, SchedulerObserver};
