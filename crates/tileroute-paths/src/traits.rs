use tileroute_core::{Direction, MoverClass, Occupant, Tile};

/// Static terrain collision, as provided by the world.
pub trait CollisionOracle {
    /// Whether a mover of `class` with footprint side `size`, anchored at
    /// `from`, may take one step towards `dir`.
    ///
    /// Anything the world cannot answer (unloaded regions, missing data)
    /// must come back as `false`.
    fn can_traverse(&self, from: Tile, dir: Direction, class: MoverClass, size: i32) -> bool;
}

/// Dynamic occupancy by other entities, consulted for NPC movers only.
pub trait OccupancyOracle {
    /// Append the occupants standing near `tile` (on `tile.height`) into
    /// `buf`. The caller clears `buf` before calling. Appending nothing is a
    /// normal answer.
    fn occupants_near(&self, tile: Tile, buf: &mut Vec<Occupant>);
}

impl<F> CollisionOracle for F
where
    F: Fn(Tile, Direction, MoverClass, i32) -> bool,
{
    #[inline]
    fn can_traverse(&self, from: Tile, dir: Direction, class: MoverClass, size: i32) -> bool {
        self(from, dir, class, size)
    }
}

/// A plain list of occupants, filtered by height only.
impl OccupancyOracle for [Occupant] {
    fn occupants_near(&self, tile: Tile, buf: &mut Vec<Occupant>) {
        buf.extend(self.iter().filter(|o| o.tile.height == tile.height));
    }
}

impl OccupancyOracle for Vec<Occupant> {
    fn occupants_near(&self, tile: Tile, buf: &mut Vec<Occupant>) {
        self.as_slice().occupants_near(tile, buf);
    }
}
