//! Per-tile collision flags.

use std::ops::{BitAnd, BitOr, Not};

use tileroute_core::Direction;

/// Bitmask of collision properties of a single tile.
///
/// Wall flags describe the edge between this tile and its neighbour in
/// that direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionFlags(pub u32);

impl CollisionFlags {
    pub const NONE: Self = Self(0);
    /// Nothing may stand here.
    pub const BLOCKED: Self = Self(1 << 0);
    pub const WALL_NORTH: Self = Self(1 << 1);
    pub const WALL_EAST: Self = Self(1 << 2);
    pub const WALL_SOUTH: Self = Self(1 << 3);
    pub const WALL_WEST: Self = Self(1 << 4);
    /// Players may stand here, NPCs may not.
    pub const NPC_BLOCKED: Self = Self(1 << 5);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether this mask shares any bit with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Wall flag for the edge towards a cardinal direction; `None` for
    /// diagonals.
    pub const fn wall(dir: Direction) -> Option<Self> {
        match dir {
            Direction::North => Some(Self::WALL_NORTH),
            Direction::East => Some(Self::WALL_EAST),
            Direction::South => Some(Self::WALL_SOUTH),
            Direction::West => Some(Self::WALL_WEST),
            _ => None,
        }
    }
}

impl BitOr for CollisionFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CollisionFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for CollisionFlags {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn flags_serialize_as_bits() {
        let f = CollisionFlags::BLOCKED | CollisionFlags::NPC_BLOCKED;
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "33");
        let back: CollisionFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
