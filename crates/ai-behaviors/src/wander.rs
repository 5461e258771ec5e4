//! Wander: flight regulation for airborne agents.
//!
//! Always eligible — whether it actually runs is entirely the scheduler's
//! slot/priority arbitration.  Each run picks a random duration, heading,
//! and preferred height above terrain, then steers toward them every tick:
//! yaw converges at a clamped angular rate, vertical drift converges on the
//! preferred height, and horizontal collisions drain the remaining
//! duration at ten times the normal rate so an obstructed wander gives up
//! early instead of grinding into a wall.

use ai_core::{angle_rad_distance, wrap_angle, Vec3, DEG2RAD, TWO_PI};
use ai_task::{section, AiTask, BaseTaskConfig, TaskCtx, TaskKind};
use serde::Deserialize;
use serde_json::Value;

// ── Config ────────────────────────────────────────────────────────────────────

/// Wander task configuration.
///
/// | Field                 | Default          |
/// |-----------------------|------------------|
/// | `movespeed`           | 0.03             |
/// | `wanderChance`        | 0.015            |
/// | `maxHeight`           | 7.0              |
/// | `preferredLightLevel` | none             |
///
/// A negative configured `preferredLightLevel` means "no preference".
/// `wanderChance` and `preferredLightLevel` are accepted for config
/// compatibility; the reference engine is unconditionally eligible (the
/// scheduler's arbitration decides whether it runs) and has no positional
/// light probe to honor the light preference with.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WanderConfig {
    #[serde(rename = "movespeed")]
    pub move_speed: f32,
    pub wander_chance: f64,
    pub max_height: f64,
    pub preferred_light_level: Option<f32>,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.03,
            wander_chance: 0.015,
            max_height: 7.0,
            preferred_light_level: None,
        }
    }
}

/// Agent-level pathing attributes, read from the agent config record:
/// `{ "pathfinder": { "minTurnAnglePerSec": …, "maxTurnAnglePerSec": … } }`.
/// Angular units are degrees per second.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PathfinderAttributes {
    min_turn_angle_per_sec: f32,
    max_turn_angle_per_sec: f32,
}

impl Default for PathfinderAttributes {
    fn default() -> Self {
        Self {
            min_turn_angle_per_sec: 250.0,
            max_turn_angle_per_sec: 450.0,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct AgentAttributes {
    pathfinder: PathfinderAttributes,
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// See the [module docs][self].
pub struct WanderTask {
    base: BaseTaskConfig,

    move_speed: f32,
    max_height: f64,

    min_turn_angle_per_sec: f32,
    max_turn_angle_per_sec: f32,

    // ── Per-run state ─────────────────────────────────────────────────────
    wander_duration: f32,
    desired_yaw: f32,
    desired_fly_height: f64,
    desired_y_motion: f64,
    cur_turn_rad_per_sec: f32,
}

impl WanderTask {
    pub fn from_value(task_cfg: &Value, agent_cfg: &Value) -> Box<dyn AiTask> {
        let base = BaseTaskConfig::from_value(task_cfg);
        let cfg: WanderConfig = section(task_cfg);
        let attrs: AgentAttributes = section(agent_cfg);

        Box::new(Self {
            base,
            move_speed: cfg.move_speed,
            max_height: cfg.max_height,
            min_turn_angle_per_sec: attrs.pathfinder.min_turn_angle_per_sec,
            max_turn_angle_per_sec: attrs.pathfinder.max_turn_angle_per_sec,
            wander_duration: 0.0,
            desired_yaw: 0.0,
            desired_fly_height: 0.0,
            desired_y_motion: 0.0,
            cur_turn_rad_per_sec: 0.0,
        })
    }

    /// Re-derive the vertical drift toward the preferred height above the
    /// terrain under the agent.
    fn readjust_fly_height(&mut self, ctx: &mut TaskCtx<'_>) {
        let terrain = ctx.world.terrain_height(ctx.agent.pos.x, ctx.agent.pos.z);
        let preferred = terrain + self.desired_fly_height;
        let offset = ctx.agent.pos.y - preferred;

        let magnitude = self.move_speed as f64 * (0.75 + ctx.rng.random::<f64>() * 0.5);
        if offset < 1.0 {
            self.desired_y_motion = magnitude;
        }
        if offset > 1.0 {
            self.desired_y_motion = -magnitude;
        }
    }
}

impl AiTask for WanderTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Wander
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

    fn start_execute(&mut self, ctx: &mut TaskCtx<'_>) {
        self.wander_duration = 0.5 + ctx.rng.random::<f32>() * 5.0;
        self.desired_yaw = ctx.agent.yaw + 2.0 * TWO_PI * (ctx.rng.random::<f32>() - 0.5);

        // Squared-random term biases the preferred height upward while
        // keeping low flights common.
        let r1: f64 = ctx.rng.random();
        let r2: f64 = ctx.rng.random();
        let r3: f64 = ctx.rng.random();
        self.desired_fly_height = (1.0 + 4.0 * r1 + 4.0 * r2 * r3).min(self.max_height);
        self.readjust_fly_height(ctx);

        ctx.agent.forward = true;
        let spread = self.max_turn_angle_per_sec - self.min_turn_angle_per_sec;
        self.cur_turn_rad_per_sec =
            (self.min_turn_angle_per_sec + ctx.rng.random::<f32>() * spread)
                * DEG2RAD
                * 50.0
                * self.move_speed;
    }

    fn continue_execute(&mut self, ctx: &mut TaskCtx<'_>, dt: f32) -> bool {
        if ctx.agent.on_ground || ctx.rng.gen_bool(0.03) {
            self.readjust_fly_height(ctx);
        }

        self.wander_duration -= dt;

        let yaw_dist = angle_rad_distance(ctx.agent.yaw, self.desired_yaw);
        let max_step = self.cur_turn_rad_per_sec * dt;
        ctx.agent.yaw = wrap_angle(ctx.agent.yaw + yaw_dist.clamp(-max_step, max_step));

        let (sin_yaw, cos_yaw) = (ctx.agent.yaw as f64).sin_cos();
        ctx.agent.walk_vector =
            Vec3::new(sin_yaw, self.desired_y_motion, cos_yaw).scale(self.move_speed as f64);

        if ctx.agent.swimming {
            // In water the height drift is irrelevant; force a strong sink.
            ctx.agent.walk_vector.y = -2.0 * self.move_speed as f64;
        }

        if ctx.agent.collided_horizontally {
            self.wander_duration -= 10.0 * dt;
        }

        self.wander_duration > 0.0
    }

    fn finish_execute(&mut self, ctx: &mut TaskCtx<'_>, _cancelled: bool) {
        ctx.agent.forward = false;
        ctx.agent.walk_vector = Vec3::ZERO;
    }
}
