//! Declarative task configuration.
//!
//! Tasks are configured from JSON records with named optional fields, e.g.:
//!
//! ```json
//! { "slot": 2, "priority": 3.0, "movespeed": 0.035, "seekingRange": 14 }
//! ```
//!
//! Every field has a documented default.  Parsing is deliberately lenient:
//! a missing field takes its default, and a malformed record falls back to
//! the full default set — configuration can degrade an agent's behavior but
//! never crash its scheduler.

use ai_world::AgentState;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

// ── Lenient section parsing ───────────────────────────────────────────────────

/// Deserialize a config section, substituting `T::default()` wholesale when
/// the record does not parse.
///
/// Concrete tasks call this twice from their constructors: once for the
/// task-level record and (where relevant) once for agent-level attributes.
pub fn section<T: DeserializeOwned + Default>(value: &Value) -> T {
    T::deserialize(value).unwrap_or_default()
}

// ── BaseTaskConfig ────────────────────────────────────────────────────────────

/// Scheduling metadata and preconditions shared by every task.
///
/// | Field                    | Default          |
/// |--------------------------|------------------|
/// | `slot`                   | 0                |
/// | `priority`               | 1.0              |
/// | `priorityForCancel`      | same as priority |
/// | `whenInEmotionState`     | none             |
/// | `whenNotInEmotionState`  | none             |
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseTaskConfig {
    pub slot: usize,

    pub priority: f32,

    priority_for_cancel: Option<f32>,

    /// Only eligible while this emotion state is active.
    pub when_in_emotion_state: Option<String>,

    /// Never eligible while this emotion state is active.
    pub when_not_in_emotion_state: Option<String>,
}

impl Default for BaseTaskConfig {
    fn default() -> Self {
        Self {
            slot: 0,
            priority: 1.0,
            priority_for_cancel: None,
            when_in_emotion_state: None,
            when_not_in_emotion_state: None,
        }
    }
}

impl BaseTaskConfig {
    /// Parse from a task-level JSON record, applying all defaults.
    pub fn from_value(task_cfg: &Value) -> Self {
        section(task_cfg)
    }

    /// The resistance an active task presents against preemption; defaults
    /// to the idle [`priority`][Self::priority] when not configured.
    #[inline]
    pub fn priority_for_cancel(&self) -> f32 {
        self.priority_for_cancel.unwrap_or(self.priority)
    }

    /// Check the emotion-state preconditions against the agent's current set.
    pub fn emotion_preconditions_hold(&self, agent: &AgentState) -> bool {
        if let Some(required) = &self.when_in_emotion_state {
            if !agent.has_emotion_state(required) {
                return false;
            }
        }
        if let Some(forbidden) = &self.when_not_in_emotion_state {
            if agent.has_emotion_state(forbidden) {
                return false;
            }
        }
        true
    }

    /// Whether an explicit `whenInEmotionState` precondition is configured.
    /// Flee uses this to bypass its generation-based fear reduction.
    #[inline]
    pub fn has_emotion_requirement(&self) -> bool {
        self.when_in_emotion_state.is_some()
    }
}
