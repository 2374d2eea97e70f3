//! The eight compass directions a mover can step in.

use crate::geom::Tile;

/// An 8-way compass direction with a unit `(dx, dz)` delta.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All eight directions, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Expansion order used by route searches. When several shortest routes
    /// exist, the one whose first diverging step comes earliest here wins.
    pub const ROUTE_ORDER: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
        Direction::SouthWest,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    /// Step along x.
    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => 1,
            Direction::West | Direction::NorthWest | Direction::SouthWest => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// Step along z.
    #[inline]
    pub const fn dz(self) -> i32 {
        match self {
            Direction::North | Direction::NorthEast | Direction::NorthWest => 1,
            Direction::South | Direction::SouthEast | Direction::SouthWest => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// `(dx, dz)` pair.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        (self.dx(), self.dz())
    }

    /// Direction with the given unit delta, `None` for `(0, 0)` or any
    /// component outside `-1..=1`.
    pub const fn from_delta(dx: i32, dz: i32) -> Option<Direction> {
        match (dx, dz) {
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, 1) => Some(Direction::NorthEast),
            (-1, 1) => Some(Direction::NorthWest),
            (1, -1) => Some(Direction::SouthEast),
            (-1, -1) => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// Direction leading from `a` to the adjacent tile `b`.
    ///
    /// Returns `None` when the tiles are not 8-adjacent on the same height.
    #[inline]
    pub fn between(a: Tile, b: Tile) -> Option<Direction> {
        if a.height != b.height {
            return None;
        }
        let (dx, dz) = a.delta_to(b);
        Self::from_delta(dx, dz)
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx() != 0 && self.dz() != 0
    }

    /// Split a direction into its x and z axial components.
    ///
    /// Cardinal directions yield a single component; the other is `None`.
    pub const fn components(self) -> (Option<Direction>, Option<Direction>) {
        let x = match self.dx() {
            1 => Some(Direction::East),
            -1 => Some(Direction::West),
            _ => None,
        };
        let z = match self.dz() {
            1 => Some(Direction::North),
            -1 => Some(Direction::South),
            _ => None,
        };
        (x, z)
    }
}
