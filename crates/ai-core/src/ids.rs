//! Strongly typed entity identifier.
//!
//! Entities are owned by the host world, not by this framework; an
//! `EntityId` is an opaque handle that world queries hand out and tasks
//! cache across ticks.  Re-resolving a cached id through the world is the
//! only way to learn whether the entity still exists.

use std::fmt;

/// Opaque handle to a world entity.
///
/// `Copy + Ord + Hash` so ids can be used as map keys and sorted collection
/// elements without ceremony.  The inner integer is `pub` because the host
/// world assigns it; this framework never fabricates ids.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}
