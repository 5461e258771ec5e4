//! `ai-core` — foundational types for the `rust_ai` behavior framework.
//!
//! This crate is a dependency of every other `ai-*` crate.  It intentionally
//! has no `ai-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                            |
//! |----------|-----------------------------------------------------|
//! | [`ids`]  | `EntityId`                                          |
//! | [`math`] | `Vec3`, yaw/angle helpers                           |
//! | [`rng`]  | `EntityRng` (per-entity deterministic RNG)          |
//! | [`time`] | `SimClock` (tick counter + elapsed milliseconds)    |
//!
//! # Errors
//!
//! There is no shared error enum here: each `ai-*` crate defines its own
//! (`TaskError`, `SchedulerError`) close to where the fallible operations
//! live.  The scheduling hot path itself is infallible by design.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod math;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::EntityId;
pub use math::{angle_rad_distance, wrap_angle, Vec3, DEG2RAD, TWO_PI};
pub use rng::EntityRng;
pub use time::SimClock;
