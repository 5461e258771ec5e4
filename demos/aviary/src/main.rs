//! aviary — smallest end-to-end demo for the rust_ai behavior framework.
//!
//! A flock of butterflies wanders over flat terrain while a player strolls
//! back and forth through the middle of it.  Each butterfly owns a task
//! scheduler with three behaviors competing for slot 0: flee (priority 2,
//! certain trigger when a threat is seen), wander (priority 1), and idle
//! (priority 1, rare).  Watch the debug summaries flip to `fleeentity(2)`
//! whenever the player passes close by.

use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use ai_behaviors::default_registry;
use ai_core::{EntityId, EntityRng, Vec3};
use ai_manager::{SchedulerObserver, TaskManager};
use ai_task::{TaskCtx, TaskKind};
use ai_world::{AgentState, EntitySnapshot, GameMode, RecordingMover, StaticWorld};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOCK_SIZE: usize = 12;
const SEED: u64 = 42;
const TICK_SECS: f32 = 0.05; // 20 ticks per simulated second
const TOTAL_TICKS: u64 = 1200; // one simulated minute
const REPORT_EVERY: u64 = 200;

const PLAYER_ID: EntityId = EntityId(1);
const PLAYER_SPEED: f64 = 0.4; // units per tick, patrolling the X axis

// ── Transition counter ────────────────────────────────────────────────────────

#[derive(Default)]
struct TransitionCounter {
    started: usize,
    flee_started: usize,
    cancelled: usize,
}

impl SchedulerObserver for TransitionCounter {
    fn on_task_started(&mut self, kind: TaskKind, _slot: usize, _priority: f32) {
        self.started += 1;
        if kind == TaskKind::Flee {
            self.flee_started += 1;
        }
    }

    fn on_task_finished(&mut self, _kind: TaskKind, _slot: usize, cancelled: bool) {
        if cancelled {
            self.cancelled += 1;
        }
    }
}

// ── Per-agent bundle ──────────────────────────────────────────────────────────

struct Butterfly {
    state: AgentState,
    mover: RecordingMover,
    rng: EntityRng,
    manager: TaskManager,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== aviary — rust_ai behavior scheduler demo ===");
    println!("Flock: {FLOCK_SIZE}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the world: flat terrain, full daylight, one roaming player.
    let mut world = StaticWorld::new();
    world.add(EntitySnapshot::player(
        PLAYER_ID,
        Vec3::new(-40.0, 0.0, 0.0),
        GameMode::Survival,
    ));

    // 2. Spawn the flock in a loose line across the player's patrol path.
    let registry = default_registry();
    let mut flock: Vec<Butterfly> = Vec::with_capacity(FLOCK_SIZE);
    for i in 0..FLOCK_SIZE {
        let id = EntityId(1000 + i as u64);
        let mut state = AgentState::new(
            id,
            Vec3::new((i as f64 - FLOCK_SIZE as f64 / 2.0) * 6.0, 3.0, 0.0),
        );
        state.generation = (i as u32) * 5; // older lineages startle less

        let mut manager = TaskManager::new();
        manager.set_debug(true);
        manager.add_task(registry.create(
            "fleeentity",
            &json!({
                "slot": 0,
                "priority": 2.0,
                "executionChance": 1.0,
                "seekingRange": 12.0,
                "fleeDurationMs": 4000
            }),
            &json!({}),
        )?)?;
        manager.add_task(registry.create(
            "wander",
            &json!({ "slot": 0, "priority": 1.0, "movespeed": 0.03 }),
            &json!({}),
        )?)?;
        manager.add_task(registry.create(
            "idle",
            &json!({ "slot": 0, "priority": 1.0, "executionChance": 0.002 }),
            &json!({}),
        )?)?;

        flock.push(Butterfly {
            state,
            mover: RecordingMover::new(),
            rng: EntityRng::new(SEED, id),
            manager,
        });
    }
    println!(
        "Registered behaviors: {}",
        registry.codes().collect::<Vec<_>>().join(", ")
    );
    println!();

    // 3. Tick loop.
    let mut counter = TransitionCounter::default();
    let t0 = Instant::now();

    for tick in 0..TOTAL_TICKS {
        // Player patrols the X axis, bouncing between ±40.
        let phase = (tick as f64 * PLAYER_SPEED) % 160.0;
        let x = if phase < 80.0 { -40.0 + phase } else { 120.0 - phase };
        if let Some(player) = world.entity_mut(PLAYER_ID) {
            player.pos = Vec3::new(x, 0.0, 0.0);
        }
        world.clock.advance(TICK_SECS);

        for butterfly in &mut flock {
            let mut ctx = TaskCtx::new(
                &mut butterfly.state,
                &world,
                &mut butterfly.mover,
                &mut butterfly.rng,
            );
            butterfly.manager.on_game_tick(&mut ctx, TICK_SECS, &mut counter);

            // Crude host locomotion: integrate the behavior's walk vector.
            let v = butterfly.state.walk_vector;
            butterfly.state.pos.x += v.x;
            butterfly.state.pos.y = (butterfly.state.pos.y + v.y).max(0.5);
            butterfly.state.pos.z += v.z;
        }

        if (tick + 1) % REPORT_EVERY == 0 {
            let fleeing = flock
                .iter()
                .filter(|b| b.manager.is_active(TaskKind::Flee))
                .count();
            println!(
                "tick {:>5}  player.x {:>6.1}  fleeing {:>2}/{}",
                tick + 1,
                x,
                fleeing,
                FLOCK_SIZE,
            );
        }
    }

    let elapsed = t0.elapsed();
    println!();
    println!(
        "Simulated {:.0} s of flock time in {:.3} s real",
        TOTAL_TICKS as f64 * TICK_SECS as f64,
        elapsed.as_secs_f64()
    );
    println!(
        "Task starts: {} ({} flees)  |  cancellations: {}",
        counter.started, counter.flee_started, counter.cancelled
    );
    println!();

    // 4. Final per-agent table.
    println!("{:<8} {:<12} {:<10} {}", "Agent", "Generation", "Pos.x", "Active tasks");
    println!("{}", "-".repeat(48));
    for (i, butterfly) in flock.iter().enumerate() {
        println!(
            "{:<8} {:<12} {:<10.1} {}",
            i,
            butterfly.state.generation,
            butterfly.state.pos.x,
            butterfly.manager.debug_summary(),
        );
    }

    Ok(())
}
