//! Task-layer error type.
//!
//! Deliberately small: configuration field errors are recovered locally by
//! substituting defaults, and the lifecycle contract is infallible by
//! signature.  What remains fallible is registry lookup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("unknown task code {0:?}")]
    UnknownCode(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
