//! Entities as the router sees them: an id, an anchor tile and a size.

use crate::geom::{Area, Tile};

/// Opaque identifier of a routable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Broad category of a mover, handed to collision queries so terrain can
/// treat players and NPCs differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoverClass {
    #[default]
    Player,
    Npc,
}

/// An entity standing on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id: EntityId,
    /// South-west anchor of the footprint.
    pub tile: Tile,
    /// Side length of the square footprint.
    pub size: i32,
}

impl Occupant {
    pub const fn new(id: EntityId, tile: Tile, size: i32) -> Self {
        Self { id, tile, size }
    }

    /// Tiles covered by this occupant.
    #[inline]
    pub const fn footprint(&self) -> Area {
        Area::square(self.tile, self.size)
    }
}
