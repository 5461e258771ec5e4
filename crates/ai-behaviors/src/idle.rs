//! Idle: occupy a slot doing nothing for a while.
//!
//! The minimal worked example of the contract, and a cheap fallback
//! occupant for agents whose interesting behaviors are rarely eligible.

use ai_task::{section, AiTask, BaseTaskConfig, TaskCtx, TaskKind};
use serde::Deserialize;
use serde_json::Value;

/// Idle task configuration.
///
/// | Field             | Default |
/// |-------------------|---------|
/// | `executionChance` | 0.001   |
/// | `minDurationMs`   | 2000    |
/// | `maxDurationMs`   | 4000    |
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdleConfig {
    pub execution_chance: f64,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            execution_chance: 0.001,
            min_duration_ms: 2000,
            max_duration_ms: 4000,
        }
    }
}

/// See the [module docs][self].
pub struct IdleTask {
    base: BaseTaskConfig,
    execution_chance: f64,
    min_duration_ms: u64,
    max_duration_ms: u64,

    idle_until_ms: u64,
}

impl IdleTask {
    pub fn from_value(task_cfg: &Value, _agent_cfg: &Value) -> Box<dyn AiTask> {
        let base = BaseTaskConfig::from_value(task_cfg);
        let cfg: IdleConfig = section(task_cfg);
        Box::new(Self {
            base,
            execution_chance: cfg.execution_chance,
            min_duration_ms: cfg.min_duration_ms,
            max_duration_ms: cfg.max_duration_ms.max(cfg.min_duration_ms),
            idle_until_ms: 0,
        })
    }
}

impl AiTask for IdleTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Idle
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

    fn should_execute(&mut self, ctx: &mut TaskCtx<'_>) -> bool {
        ctx.rng.gen_bool(self.execution_chance) && self.base.emotion_preconditions_hold(ctx.agent)
    }

    fn start_execute(&mut self, ctx: &mut TaskCtx<'_>) {
        let duration = ctx.rng.gen_range(self.min_duration_ms..=self.max_duration_ms);
        self.idle_until_ms = ctx.world.elapsed_ms() + duration;
    }

    fn continue_execute(&mut self, ctx: &mut TaskCtx<'_>, _dt: f32) -> bool {
        ctx.world.elapsed_ms() < self.idle_until_ms
    }

    fn finish_execute(&mut self, _ctx: &mut TaskCtx<'_>, _cancelled: bool) {}
}
