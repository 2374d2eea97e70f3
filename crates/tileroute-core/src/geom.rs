//! Geometry primitives: [`Tile`], [`RouteCoordinates`] and [`Area`].
//!
//! `x` grows east, `z` grows north. Every tile also carries the height level
//! it sits on; tiles on different heights never touch.

use std::fmt;

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// One grid cell: `(x, z)` on height level `height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: i32,
    pub z: i32,
    pub height: i32,
}

impl Tile {
    /// Create a new tile.
    #[inline]
    pub const fn new(x: i32, z: i32, height: i32) -> Self {
        Self { x, z, height }
    }

    /// Return the tile shifted by `(dx, dz)` on the same height.
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
            height: self.height,
        }
    }

    /// The neighbouring tile one step towards `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        self.shift(dir.dx(), dir.dz())
    }

    /// Per-axis offset `(other.x - self.x, other.z - self.z)`.
    #[inline]
    pub const fn delta_to(self, other: Tile) -> (i32, i32) {
        (other.x - self.x, other.z - self.z)
    }

    /// Chebyshev (L∞) distance on the plane, ignoring height.
    #[inline]
    pub fn chebyshev(self, other: Tile) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Squared Euclidean distance on the plane, ignoring height.
    #[inline]
    pub fn distance_squared(self, other: Tile) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dz = i64::from(self.z - other.z);
        dx * dx + dz * dz
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.z, self.height)
    }
}

// ---------------------------------------------------------------------------
// RouteCoordinates
// ---------------------------------------------------------------------------

/// A waypoint handed to route consumers.
///
/// Kept separate from [`Tile`] so the router's internal representation can
/// change without touching movement code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCoordinates {
    pub x: i32,
    pub z: i32,
    pub height: i32,
}

impl RouteCoordinates {
    #[inline]
    pub const fn new(x: i32, z: i32, height: i32) -> Self {
        Self { x, z, height }
    }
}

impl From<Tile> for RouteCoordinates {
    #[inline]
    fn from(t: Tile) -> Self {
        Self::new(t.x, t.z, t.height)
    }
}

impl From<RouteCoordinates> for Tile {
    #[inline]
    fn from(c: RouteCoordinates) -> Self {
        Tile::new(c.x, c.z, c.height)
    }
}

impl fmt::Display for RouteCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.z, self.height)
    }
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// A rectangle of tiles on one height level, anchored at its south-west
/// corner. `width` runs along x, `length` along z.
///
/// An entity footprint is the square `Area::square(anchor, size)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub min: Tile,
    pub width: i32,
    pub length: i32,
}

impl Area {
    #[inline]
    pub const fn new(min: Tile, width: i32, length: i32) -> Self {
        Self { min, width, length }
    }

    /// Square footprint of side `size` anchored at `anchor`.
    #[inline]
    pub const fn square(anchor: Tile, size: i32) -> Self {
        Self::new(anchor, size, size)
    }

    /// The `(2 * radius + 1)²` window centred on `center`.
    #[inline]
    pub const fn centered(center: Tile, radius: i32) -> Self {
        Self::new(
            center.shift(-radius, -radius),
            2 * radius + 1,
            2 * radius + 1,
        )
    }

    /// Whether the area holds no tiles.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.length <= 0
    }

    /// Number of tiles in the area.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width as usize) * (self.length as usize)
    }

    /// Largest x still inside the area.
    #[inline]
    pub fn max_x(self) -> i32 {
        self.min.x + self.width - 1
    }

    /// Largest z still inside the area.
    #[inline]
    pub fn max_z(self) -> i32 {
        self.min.z + self.length - 1
    }

    /// Whether `t` lies inside the area (same height, inclusive bounds).
    #[inline]
    pub fn contains(self, t: Tile) -> bool {
        t.height == self.min.height
            && t.x >= self.min.x
            && t.x <= self.max_x()
            && t.z >= self.min.z
            && t.z <= self.max_z()
    }

    /// Whether the two areas share at least one tile.
    #[inline]
    pub fn overlaps(self, other: Area) -> bool {
        if self.is_empty() || other.is_empty() || self.min.height != other.min.height {
            return false;
        }
        self.min.x <= other.max_x()
            && other.min.x <= self.max_x()
            && self.min.z <= other.max_z()
            && other.min.z <= self.max_z()
    }

    /// Iterate the tiles in west-major order: x ascending, then z ascending
    /// within each column.
    #[inline]
    pub fn iter(self) -> AreaIter {
        AreaIter {
            area: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Area {
    type Item = Tile;
    type IntoIter = AreaIter;
    #[inline]
    fn into_iter(self) -> AreaIter {
        self.iter()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}x{}]", self.min, self.width, self.length)
    }
}

// ---------------------------------------------------------------------------
// AreaIter
// ---------------------------------------------------------------------------

/// West-major iterator over the tiles of an [`Area`].
#[derive(Clone, Debug)]
pub struct AreaIter {
    area: Area,
    cur: Tile,
}

impl Iterator for AreaIter {
    type Item = Tile;

    #[inline]
    fn next(&mut self) -> Option<Tile> {
        if self.area.is_empty() || self.cur.x > self.area.max_x() {
            return None;
        }
        let t = self.cur;
        self.cur.z += 1;
        if self.cur.z > self.area.max_z() {
            self.cur.z = self.area.min.z;
            self.cur.x += 1;
        }
        Some(t)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.area.is_empty() || self.cur.x > self.area.max_x() {
            return (0, Some(0));
        }
        let l = self.area.length as usize;
        let remaining_in_column = (self.area.max_z() - self.cur.z + 1) as usize;
        let remaining_columns = (self.area.max_x() - self.cur.x) as usize;
        let total = remaining_in_column + remaining_columns * l;
        (total, Some(total))
    }
}

impl ExactSizeIterator for AreaIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_step_and_delta() {
        let t = Tile::new(3, 4, 1);
        assert_eq!(t.step(Direction::NorthEast), Tile::new(4, 5, 1));
        assert_eq!(t.step(Direction::West), Tile::new(2, 4, 1));
        assert_eq!(t.delta_to(Tile::new(1, 9, 1)), (-2, 5));
    }

    #[test]
    fn tile_distances() {
        let a = Tile::new(0, 0, 0);
        let b = Tile::new(3, -4, 0);
        assert_eq!(a.chebyshev(b), 4);
        assert_eq!(a.distance_squared(b), 25);
    }

    #[test]
    fn route_coordinates_convert() {
        let t = Tile::new(7, -2, 3);
        let c = RouteCoordinates::from(t);
        assert_eq!(c, RouteCoordinates::new(7, -2, 3));
        assert_eq!(Tile::from(c), t);
    }

    #[test]
    fn area_contains_respects_height() {
        let a = Area::square(Tile::new(2, 2, 0), 2);
        assert!(a.contains(Tile::new(2, 2, 0)));
        assert!(a.contains(Tile::new(3, 3, 0)));
        assert!(!a.contains(Tile::new(4, 3, 0)));
        assert!(!a.contains(Tile::new(1, 2, 0)));
        assert!(!a.contains(Tile::new(2, 2, 1)));
    }

    #[test]
    fn area_centered_window() {
        let w = Area::centered(Tile::new(10, 10, 0), 2);
        assert_eq!(w.len(), 25);
        assert_eq!(w.min, Tile::new(8, 8, 0));
        assert_eq!(w.max_x(), 12);
        assert_eq!(w.max_z(), 12);
    }

    #[test]
    fn area_overlaps() {
        let a = Area::square(Tile::new(0, 0, 0), 2);
        assert!(a.overlaps(Area::square(Tile::new(1, 1, 0), 2)));
        assert!(!a.overlaps(Area::square(Tile::new(2, 0, 0), 2)));
        assert!(!a.overlaps(Area::square(Tile::new(1, 1, 1), 2)));
    }

    #[test]
    fn area_iter_is_west_major() {
        let a = Area::new(Tile::new(0, 0, 0), 2, 3);
        let tiles: Vec<_> = a.iter().collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(a.iter().len(), 6);
        assert_eq!(tiles[0], Tile::new(0, 0, 0));
        assert_eq!(tiles[1], Tile::new(0, 1, 0));
        assert_eq!(tiles[2], Tile::new(0, 2, 0));
        assert_eq!(tiles[3], Tile::new(1, 0, 0));
        assert_eq!(tiles[5], Tile::new(1, 2, 0));
    }

    #[test]
    fn empty_area_iter() {
        let a = Area::new(Tile::new(0, 0, 0), 0, 4);
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn area_round_trip() {
        let a = Area::new(Tile::new(1, 2, 3), 4, 5);
        let json = serde_json::to_string(&a).unwrap();
        let back: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
