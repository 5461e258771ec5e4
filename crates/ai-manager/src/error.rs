//! Scheduler error type.
//!
//! The tick path is infallible; only task-list setup can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("task slot {slot} out of range (slot table has {limit} entries)")]
    SlotOutOfRange { slot: usize, limit: usize },
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
