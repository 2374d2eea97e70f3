use tileroute_core::{EntityId, MoverClass, Occupant, Tile};

use crate::error::RouteError;
use crate::traits::OccupancyOracle;

/// What kind of entity is being routed.
///
/// Only NPCs are subject to the occupancy rule; they carry the oracle used
/// to look up their neighbours and their own id so they never block
/// themselves.
#[derive(Clone, Copy)]
pub enum MoverKind<'a> {
    Player,
    Npc {
        id: EntityId,
        occupancy: &'a dyn OccupancyOracle,
    },
}

/// The entity being routed: its footprint size and kind.
#[derive(Clone, Copy)]
pub struct Mover<'a> {
    pub size: i32,
    pub kind: MoverKind<'a>,
}

impl<'a> Mover<'a> {
    /// A player mover of footprint side `size`.
    pub const fn player(size: i32) -> Self {
        Self {
            size,
            kind: MoverKind::Player,
        }
    }

    /// An NPC mover of footprint side `size`, checked against `occupancy`.
    pub fn npc(id: EntityId, size: i32, occupancy: &'a dyn OccupancyOracle) -> Self {
        Self {
            size,
            kind: MoverKind::Npc { id, occupancy },
        }
    }

    /// Category passed on to collision queries.
    pub const fn class(&self) -> MoverClass {
        match self.kind {
            MoverKind::Player => MoverClass::Player,
            MoverKind::Npc { .. } => MoverClass::Npc,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RouteError> {
        RouteError::check_size("size", self.size)
    }

    /// Whether stepping onto `anchor` is refused by a larger occupant.
    ///
    /// An NPC is blocked when another entity on the same height, strictly
    /// larger than itself, has a footprint covering `anchor`. Players are
    /// never blocked. `buf` is scratch space for the query.
    pub(crate) fn blocked_at(&self, anchor: Tile, buf: &mut Vec<Occupant>) -> bool {
        let MoverKind::Npc { id, occupancy } = self.kind else {
            return false;
        };
        buf.clear();
        occupancy.occupants_near(anchor, buf);
        buf.iter().any(|o| {
            o.id != id
                && o.tile.height == anchor.height
                && o.size > self.size
                && o.footprint().contains(anchor)
        })
    }
}
