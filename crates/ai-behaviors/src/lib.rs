//! `ai-behaviors` — reference implementations of the task contract.
//!
//! | Module     | Behavior                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`flee`]   | Pursuit avoidance: detect a threat, run the other way       |
//! | [`wander`] | Flight regulation: random heading + preferred-height drift  |
//! | [`idle`]   | Placeholder: occupy a slot doing nothing for a while        |
//!
//! Flee and wander are the interesting ones — each is a state machine that
//! holds timers and cached targets across ticks, re-validates the world
//! every `continue_execute`, and cleans up its movement request from both
//! finish paths.  `idle` exists so an agent always has something cheap to
//! fall back to, and as the minimal worked example of the contract.

pub mod flee;
pub mod idle;
pub mod wander;


use ai_task::{TaskKind, TaskRegistry};

pub use flee::{FleeConfig, FleeTask};
pub use idle::{IdleConfig, IdleTask};
pub use wander::{WanderConfig, WanderTask};

/// A registry with the three built-in behaviors registered under their
/// config codes.
pub fn default_registry() -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    registry.register(TaskKind::Flee.code(), FleeTask::from_value);
    registry.register(TaskKind::Wander.code(), WanderTask::from_value);
    registry.register(TaskKind::Idle.code(), IdleTask::from_value);
    registry
}
