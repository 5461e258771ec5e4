//! Unit tests for ai-task.

use ai_core::{EntityId, EntityRng, Vec3};
use ai_world::{AgentState, RecordingMover, StaticWorld};
use serde_json::{json, Value};

use crate::{
    section, AiTask, BaseTaskConfig, NotifyEvent, TaskCtx, TaskError, TaskKind, TaskRegistry,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct CtxParts {
    agent: AgentState,
    world: StaticWorld,
    mover: RecordingMover,
    rng: EntityRng,
}

impl CtxParts {
    fn new() -> Self {
        Self {
            agent: AgentState::new(EntityId(0), Vec3::ZERO),
            world: StaticWorld::new(),
            mover: RecordingMover::new(),
            rng: EntityRng::new(42, EntityId(0)),
        }
    }

    fn ctx(&mut self) -> TaskCtx<'_> {
        TaskCtx::new(&mut self.agent, &self.world, &mut self.mover, &mut self.rng)
    }
}

/// Minimal contract implementation: always eligible, runs for a fixed
/// number of ticks.
struct CountdownTask {
    base: BaseTaskConfig,
    remaining: u32,
    run_ticks: u32,
}

impl CountdownTask {
    fn from_value(task_cfg: &Value, _agent_cfg: &Value) -> Box<dyn AiTask> {
        Box::new(Self {
            base: BaseTaskConfig::from_value(task_cfg),
            remaining: 0,
            run_ticks: 3,
        })
    }
}

impl AiTask for CountdownTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Custom(0)
    }

    fn slot(&self) -> usize {
        self.base.slot
    }

    fn priority(&self) -> f32 {
        self.base.priority
    }

    fn priority_for_cancel(&self) -> f32 {
        self.base.priority_for_cancel()
    }

    fn should_execute(&mut self, _ctx: &mut TaskCtx<'_>) -> bool {
        true
    }

    fn start_execute(&mut self, _ctx: &mut TaskCtx<'_>) {
        self.remaining = self.run_ticks;
    }

    fn continue_execute(&mut self, _ctx: &mut TaskCtx<'_>, _dt: f32) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    fn finish_execute(&mut self, _ctx: &mut TaskCtx<'_>, _cancelled: bool) {}
}

// ── TaskKind ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for kind in [TaskKind::Flee, TaskKind::Wander, TaskKind::Idle] {
            assert_eq!(TaskKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(TaskKind::from_code("meleeattack"), None);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(TaskKind::Flee.to_string(), "fleeentity");
        assert_eq!(TaskKind::Custom(3).to_string(), "custom#3");
    }
}

// ── BaseTaskConfig ────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_applied_on_empty_record() {
        let cfg = BaseTaskConfig::from_value(&json!({}));
        assert_eq!(cfg.slot, 0);
        assert_eq!(cfg.priority, 1.0);
        assert_eq!(cfg.priority_for_cancel(), 1.0);
        assert!(cfg.when_in_emotion_state.is_none());
    }

    #[test]
    fn priority_for_cancel_defaults_to_priority() {
        let cfg = BaseTaskConfig::from_value(&json!({ "priority": 2.5 }));
        assert_eq!(cfg.priority_for_cancel(), 2.5);

        let cfg = BaseTaskConfig::from_value(&json!({
            "priority": 2.5,
            "priorityForCancel": 9.0
        }));
        assert_eq!(cfg.priority_for_cancel(), 9.0);
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        // priority as a string does not parse; the whole record defaults.
        let cfg = BaseTaskConfig::from_value(&json!({ "priority": "high", "slot": 3 }));
        assert_eq!(cfg.slot, 0);
        assert_eq!(cfg.priority, 1.0);
    }

    #[test]
    fn section_helper_defaults_on_non_object() {
        let cfg: BaseTaskConfig = section(&json!(null));
        assert_eq!(cfg.priority, 1.0);
        let cfg: BaseTaskConfig = section(&json!([1, 2, 3]));
        assert_eq!(cfg.slot, 0);
    }

    #[test]
    fn emotion_preconditions() {
        let mut parts = CtxParts::new();
        let cfg = BaseTaskConfig::from_value(&json!({ "whenInEmotionState": "fleeondamage" }));
        assert!(!cfg.emotion_preconditions_hold(&parts.agent));
        parts.agent.emotion_states.insert("fleeondamage".to_string());
        assert!(cfg.emotion_preconditions_hold(&parts.agent));

        let cfg = BaseTaskConfig::from_value(&json!({ "whenNotInEmotionState": "fleeondamage" }));
        assert!(!cfg.emotion_preconditions_hold(&parts.agent));
    }
}

// ── TaskRegistry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn create_known_code() {
        let mut registry = TaskRegistry::new();
        registry.register("countdown", CountdownTask::from_value);
        let task = registry
            .create("countdown", &json!({ "slot": 2, "priority": 4.0 }), &json!({}))
            .unwrap();
        assert_eq!(task.slot(), 2);
        assert_eq!(task.priority(), 4.0);
    }

    #[test]
    fn unknown_code_errors() {
        let registry = TaskRegistry::new();
        let err = registry.create("nope", &json!({}), &json!({})).unwrap_err();
        assert!(matches!(err, TaskError::UnknownCode(code) if code == "nope"));
    }

    #[test]
    fn codes_lists_registrations() {
        let mut registry = TaskRegistry::new();
        registry.register("countdown", CountdownTask::from_value);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.codes().collect::<Vec<_>>(), vec!["countdown"]);
    }
}

// ── Trait object behavior ─────────────────────────────────────────────────────

#[cfg(test)]
mod trait_tests {
    use super::*;

    #[test]
    fn lifecycle_via_trait_object() {
        let mut parts = CtxParts::new();
        let mut task: Box<dyn AiTask> =
            CountdownTask::from_value(&json!({}), &json!({}));

        let mut ctx = parts.ctx();
        assert!(task.should_execute(&mut ctx));
        task.start_execute(&mut ctx);
        assert!(task.continue_execute(&mut ctx, 0.05));
        assert!(task.continue_execute(&mut ctx, 0.05));
        assert!(!task.continue_execute(&mut ctx, 0.05));
        task.finish_execute(&mut ctx, false);
    }

    #[test]
    fn notify_defaults_to_no_activation() {
        let mut parts = CtxParts::new();
        let mut task: Box<dyn AiTask> =
            CountdownTask::from_value(&json!({}), &json!({}));
        let mut ctx = parts.ctx();
        assert!(!task.notify(&mut ctx, &NotifyEvent::hurt(EntityId(9))));
    }
}
