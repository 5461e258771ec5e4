//! Flee: pursuit-avoidance behavior.
//!
//! Eligibility rolls a per-tick chance, checks the ambient light floor and
//! emotion preconditions, then runs a nearest-entity query for a matching
//! threat.  The detection radius shrinks with the agent's breeding
//! generation — long-domesticated lineages barely startle — but the
//! reduction factor is floored at 0.01 so the radius never collapses to
//! zero.
//!
//! While active, the flee point is recomputed every tick (the threat
//! moves): 10 units ahead of the agent along the heading directly opposite
//! the threat's bearing.  The run ends when the threat is outdistanced,
//! dies, or despawns, when movement reports stuck, when the agent enters an
//! invulnerability window, or when the duration budget runs out.

use std::f32::consts::PI;

use ai_core::{EntityId, Vec3};
use ai_task::{section, AiTask, BaseTaskConfig, NotifyEvent, TaskCtx, TaskKind};
use ai_world::{EntitySnapshot, GameMode, LifeState};
use serde::Deserialize;
use serde_json::Value;

// ── Config ────────────────────────────────────────────────────────────────────

/// Flee task configuration.
///
/// | Field             | Default             |
/// |-------------------|---------------------|
/// | `movespeed`       | 0.02                |
/// | `seekingRange`    | 25.0                |
/// | `executionChance` | 0.04                |
/// | `minDayLight`     | -1.0 (no floor)     |
/// | `cancelOnHurt`    | false               |
/// | `fleeingDistance` | `seekingRange` + 6  |
/// | `fleeDurationMs`  | 5000                |
/// | `entityCodes`     | `["player"]`        |
///
/// `entityCodes` entries ending in `*` match by prefix; the rest match
/// exactly.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FleeConfig {
    #[serde(rename = "movespeed")]
    pub move_speed: f32,
    pub seeking_range: f64,
    pub execution_chance: f64,
    pub min_day_light: f32,
    pub cancel_on_hurt: bool,
    pub fleeing_distance: Option<f64>,
    pub flee_duration_ms: u64,
    pub entity_codes: Vec<String>,
}

impl Default for FleeConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.02,
            seeking_range: 25.0,
            execution_chance: 0.04,
            min_day_light: -1.0,
            cancel_on_hurt: false,
            fleeing_distance: None,
            flee_duration_ms: 5000,
            entity_codes: vec!["player".to_string()],
        }
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// See the [module docs][self].
pub struct FleeTask {
    base: BaseTaskConfig,

    move_speed: f32,
    seeking_range: f64,
    execution_chance: f64,
    min_day_light: f32,
    cancel_on_hurt: bool,
    /// Coupled to the detection radius: defaulting to `seekingRange + 6`
    /// keeps a just-escaped agent from immediately re-fleeing at the edge
    /// of its detection range.
    fleeing_distance: f64,
    flee_duration_ms: u64,

    codes_exact: Vec<String>,
    codes_begins_with: Vec<String>,

    // ── Per-run state ─────────────────────────────────────────────────────
    target: Option<EntitySnapshot>,
    flee_point: Vec3,
    flee_start_ms: u64,
    cancel_requested: bool,
}

impl FleeTask {
    /// Build from task-level config; the agent-level record carries nothing
    /// this task reads.
    pub fn from_value(task_cfg: &Value, _agent_cfg: &Value) -> Box<dyn AiTask> {
        let base = BaseTaskConfig::from_value(task_cfg);
        let cfg: FleeConfig = section(task_cfg);

        let mut codes_exact = Vec::new();
        let mut codes_begins_with = Vec::new();
        for code in &cfg.entity_codes {
            match code.strip_suffix('*') {
                Some(prefix) => codes_begins_with.push(prefix.to_string()),
                None => codes_exact.push(code.clone()),
            }
        }

        Box::new(Self {
            base,
            move_speed: cfg.move_speed,
            seeking_range: cfg.seeking_range,
            execution_chance: cfg.execution_chance,
            min_day_light: cfg.min_day_light,
            cancel_on_hurt: cfg.cancel_on_hurt,
            fleeing_distance: cfg.fleeing_distance.unwrap_or(cfg.seeking_range + 6.0),
            flee_duration_ms: cfg.flee_duration_ms,
            codes_exact,
            codes_begins_with,
            target: None,
            flee_point: Vec3::ZERO,
            flee_start_ms: 0,
            cancel_requested: false,
        })
    }

    /// How scared this agent still is, in `(0, 1]`.  Generations beyond 50
    /// would go negative; the 0.01 floor keeps the detection radius
    /// strictly positive.  An explicit emotion-state requirement overrides
    /// the reduction entirely.
    fn fear_reduction_factor(&self, generation: u32) -> f64 {
        if self.base.has_emotion_requirement() {
            return 1.0;
        }
        ((50.0 - generation as f64) / 50.0).max(0.01)
    }

    fn matches_threat(&self, candidate: &EntitySnapshot, own_id: EntityId) -> bool {
        if !candidate.alive || !candidate.interactable || candidate.id == own_id {
            return false;
        }
        // Creative and spectator players are never threats.
        if matches!(
            candidate.player_mode,
            Some(GameMode::Creative) | Some(GameMode::Spectator)
        ) {
            return false;
        }
        if self.codes_exact.iter().any(|c| *c == candidate.code) {
            return true;
        }
        self.codes_begins_with
            .iter()
            .any(|p| candidate.code.starts_with(p.as_str()))
    }

    /// Recompute the flee point: 10 units ahead, heading directly away
    /// from the threat.
    fn update_flee_point(&mut self, agent_pos: Vec3, threat_pos: Vec3) {
        let away = agent_pos.yaw_to(threat_pos) + PI;
        self.flee_point = agent_pos.ahead(10.0, away);
    }
}

impl AiTask for FleeTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Flee
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
        if !ctx.rng.gen_bool(self.execution_chance) {
            return false;
        }
        if ctx.world.day_light() < self.min_day_light {
            return false;
        }
        if !self.base.emotion_preconditions_hold(ctx.agent) {
            return false;
        }

        let range = self.fear_reduction_factor(ctx.agent.generation) * self.seeking_range;
        let own_id = ctx.agent.id;
        let origin = ctx.agent.pos;
        let target = ctx
            .world
            .nearest_entity(origin, range, range, &|e| self.matches_threat(e, own_id));

        match target {
            Some(threat) => {
                self.update_flee_point(origin, threat.pos);
                self.target = Some(threat);
                true
            }
            None => {
                self.target = None;
                false
            }
        }
    }

    fn start_execute(&mut self, ctx: &mut TaskCtx<'_>) {
        // Fresh run regardless of how the previous one ended.
        self.flee_start_ms = ctx.world.elapsed_ms();
        self.cancel_requested = false;

        if let Some(threat) = self.target.clone() {
            self.update_flee_point(ctx.agent.pos, threat.pos);
            let tolerance = threat.collision_width as f32 + 0.2;
            ctx.mover.go_to(self.flee_point, self.move_speed, tolerance);
        }
    }

    fn continue_execute(&mut self, ctx: &mut TaskCtx<'_>, _dt: f32) -> bool {
        let Some(cached) = &self.target else {
            return false;
        };

        // The threat moves between ticks: re-resolve, steer the movement
        // request to the updated flee point.
        let Some(threat) = ctx.world.entity(cached.id) else {
            return false; // despawned
        };
        self.update_flee_point(ctx.agent.pos, threat.pos);
        ctx.mover.retarget(self.flee_point);

        let escaped = ctx.agent.pos.square_distance_to(threat.pos)
            > self.fleeing_distance * self.fleeing_distance;
        if escaped {
            return false;
        }
        if ctx.agent.is_activity_running("invulnerable") {
            return false;
        }
        if self.cancel_requested {
            return false;
        }

        let alive = threat.alive;
        self.target = Some(threat);

        !ctx.mover.stuck()
            && alive
            && ctx.world.elapsed_ms() - self.flee_start_ms < self.flee_duration_ms
    }

    fn finish_execute(&mut self, ctx: &mut TaskCtx<'_>, _cancelled: bool) {
        ctx.mover.stop();
        self.target = None;
    }

    fn notify(&mut self, _ctx: &mut TaskCtx<'_>, event: &NotifyEvent) -> bool {
        if event.key == "hurt" && self.cancel_on_hurt {
            self.cancel_requested = true;
        }
        false
    }

    fn on_state_changed(&mut self, _before: LifeState) {
        // A deactivated agent keeps no stale threat across reactivation.
        self.target = None;
    }
}
