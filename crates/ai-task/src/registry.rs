//! Behavior kind enumeration and the code → factory registry.
//!
//! `TaskKind` is the closed identity tag used on the scheduling hot path
//! (forced stop by kind, debug summaries).  `TaskRegistry` is the open
//! extension point used only at configuration time: hosts register extra
//! factories, then build tasks from `(code, config)` pairs.

use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::{AiTask, TaskError, TaskResult};

// ── TaskKind ──────────────────────────────────────────────────────────────────

/// Identity tag of a behavior.
///
/// `Custom` covers host-registered behaviors; the scheduler treats all
/// custom kinds sharing a tag index as the same type for forced stops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TaskKind {
    Flee,
    Wander,
    Idle,
    /// Host-registered behavior, keyed by registration order.
    Custom(u16),
}

impl TaskKind {
    /// Short code used in configuration files and debug output.
    pub fn code(self) -> &'static str {
        match self {
            TaskKind::Flee => "fleeentity",
            TaskKind::Wander => "wander",
            TaskKind::Idle => "idle",
            TaskKind::Custom(_) => "custom",
        }
    }

    /// Inverse of [`code`][Self::code] for the built-in kinds.
    pub fn from_code(code: &str) -> Option<TaskKind> {
        match code {
            "fleeentity" => Some(TaskKind::Flee),
            "wander" => Some(TaskKind::Wander),
            "idle" => Some(TaskKind::Idle),
            _ => None,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Custom(n) => write!(f, "custom#{n}"),
            kind => f.write_str(kind.code()),
        }
    }
}

// ── TaskRegistry ──────────────────────────────────────────────────────────────

/// Builds a boxed task from its task-level and agent-level config records.
pub type TaskFactory = fn(task_cfg: &Value, agent_cfg: &Value) -> Box<dyn AiTask>;

/// Code → factory table, built once at startup and read-only thereafter.
///
/// Not on the tick hot path: the registry exists for configuration parsing
/// and diagnostics only.
#[derive(Default)]
pub struct TaskRegistry {
    factories: FxHashMap<String, TaskFactory>,
}

impl TaskRegistry {
    /// An empty registry.  Most hosts want
    /// `ai_behaviors::default_registry()` instead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a factory under `code`.
    pub fn register(&mut self, code: &str, factory: TaskFactory) {
        self.factories.insert(code.to_string(), factory);
    }

    /// Build a task from a config record.  The only error is an unknown
    /// code; malformed config fields inside the record fall back to the
    /// task's documented defaults.
    pub fn create(
        &self,
        code: &str,
        task_cfg: &Value,
        agent_cfg: &Value,
    ) -> TaskResult<Box<dyn AiTask>> {
        match self.factories.get(code) {
            Some(factory) => Ok(factory(task_cfg, agent_cfg)),
            None => Err(TaskError::UnknownCode(code.to_string())),
        }
    }

    /// Registered codes, for diagnostics.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
