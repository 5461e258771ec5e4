//! `ai-world` — the seams between behavior tasks and the host world.
//!
//! Spatial queries and path/motion execution are external collaborators:
//! tasks consume them as opaque interfaces and never see the host's actual
//! world representation.  This crate defines those interfaces plus the plain
//! data that crosses them.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`agent`] | `AgentState` — the owning entity's mutable body state       |
//! | [`entity`]| `EntitySnapshot`, `GameMode`, `LifeState`                   |
//! | [`world`] | `WorldView` trait, `StaticWorld` reference implementation   |
//! | [`mover`] | `MoveDriver` trait, `RecordingMover` reference implementation|
//!
//! # Design notes
//!
//! Movement is fire-and-forget: a task issues `go_to` and then *polls* the
//! driver's `stuck()`/`arrived()` flags on subsequent ticks.  Nothing calls
//! back into a task, so no shared-mutable callback state exists and every
//! task callback stays synchronous.

pub mod agent;
pub mod entity;
pub mod mover;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::AgentState;
pub use entity::{EntitySnapshot, GameMode, LifeState};
pub use mover::{MoveDriver, MoveEvent, RecordingMover};
pub use world::{StaticWorld, WorldView};
