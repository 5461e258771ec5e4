//! Plain data returned by world queries.

use ai_core::{EntityId, Vec3};

// ── GameMode ──────────────────────────────────────────────────────────────────

/// Game mode of a player entity.
///
/// Tasks use this to exclude non-threatening players: creative and spectator
/// players never qualify as flee threats.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameMode {
    Survival,
    Creative,
    Spectator,
}

// ── LifeState ─────────────────────────────────────────────────────────────────

/// Coarse lifecycle state of an entity, as tracked by the host world.
///
/// The previous value is handed to tasks through the scheduler's
/// `on_state_changed` fan-out when the host flips it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum LifeState {
    #[default]
    Active,
    /// Out of simulation range; the host may stop ticking the agent.
    Inactive,
    Despawned,
}

// ── EntitySnapshot ────────────────────────────────────────────────────────────

/// A point-in-time view of one world entity, as returned by
/// [`WorldView`][crate::WorldView] queries.
///
/// Snapshots are owned values: holding one across ticks tells you nothing
/// about the live entity.  Tasks that track a target cache its `id` and
/// re-resolve through [`WorldView::entity`][crate::WorldView::entity] every
/// tick to observe movement and death.
#[derive(Clone, Debug)]
pub struct EntitySnapshot {
    pub id: EntityId,

    /// Behavior code, e.g. `"player"` or `"wolf-male"`.  Matched exactly or
    /// by prefix against task config entity-code lists.
    pub code: String,

    pub pos: Vec3,

    pub alive: bool,

    /// Whether the entity can be interacted with at all.  Ghost/preview
    /// entities report `false` and are invisible to eligibility queries.
    pub interactable: bool,

    /// `Some` when the entity is a player.
    pub player_mode: Option<GameMode>,

    /// Width of the entity's collision box, used to derive movement arrival
    /// tolerances.
    pub collision_width: f64,
}

impl EntitySnapshot {
    /// A minimal living, interactable non-player entity — the common case in
    /// tests and demos.
    pub fn creature(id: EntityId, code: &str, pos: Vec3) -> Self {
        Self {
            id,
            code: code.to_string(),
            pos,
            alive: true,
            interactable: true,
            player_mode: None,
            collision_width: 0.6,
        }
    }

    /// A living, interactable player in the given mode.
    pub fn player(id: EntityId, pos: Vec3, mode: GameMode) -> Self {
        Self {
            id,
            code: "player".to_string(),
            pos,
            alive: true,
            interactable: true,
            player_mode: Some(mode),
            collision_width: 0.6,
        }
    }
}
