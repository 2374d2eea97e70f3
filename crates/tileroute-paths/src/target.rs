use std::collections::HashSet;

use tileroute_core::{Area, Direction, Tile};

/// The tiles a route may end on.
///
/// Tiles keep their insertion order so that every scan over the set is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    tiles: Vec<Tile>,
    lookup: HashSet<Tile>,
}

impl TargetSet {
    /// An empty set. No route can reach it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly `tile`.
    pub fn single(tile: Tile) -> Self {
        let mut s = Self::new();
        s.insert(tile);
        s
    }

    /// The melee approach of a `width` × `length` footprint anchored at
    /// `destination`: the footprint itself plus the four axis-adjacent tiles
    /// of every footprint tile.
    pub fn around(destination: Tile, width: i32, length: i32) -> Self {
        let mut s = Self::new();
        for t in Area::new(destination, width, length) {
            s.insert(t);
            for dir in [
                Direction::West,
                Direction::East,
                Direction::South,
                Direction::North,
            ] {
                s.insert(t.step(dir));
            }
        }
        s
    }

    /// Add `tile`; duplicates are ignored.
    pub fn insert(&mut self, tile: Tile) {
        if self.lookup.insert(tile) {
            self.tiles.push(tile);
        }
    }

    #[inline]
    pub fn contains(&self, tile: Tile) -> bool {
        self.lookup.contains(&tile)
    }

    /// Tiles in insertion order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The south-west-most tile (smallest `x + z`, then smallest `x`).
    pub fn south_west(&self) -> Option<Tile> {
        self.tiles.iter().copied().min_by_key(|t| (t.x + t.z, t.x))
    }

    /// Squared Euclidean distance from `tile` to the closest member.
    pub fn nearest_distance_squared(&self, tile: Tile) -> Option<i64> {
        self.tiles.iter().map(|t| t.distance_squared(tile)).min()
    }
}

impl FromIterator<Tile> for TargetSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut s = Self::new();
        for t in iter {
            s.insert(t);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_single_tile_is_a_plus() {
        let s = TargetSet::around(Tile::new(5, 5, 0), 1, 1);
        assert_eq!(s.len(), 5);
        assert!(s.contains(Tile::new(5, 5, 0)));
        assert!(s.contains(Tile::new(4, 5, 0)));
        assert!(s.contains(Tile::new(6, 5, 0)));
        assert!(s.contains(Tile::new(5, 4, 0)));
        assert!(s.contains(Tile::new(5, 6, 0)));
        assert!(!s.contains(Tile::new(4, 4, 0)));
    }

    #[test]
    fn around_two_by_two_skips_corners() {
        let s = TargetSet::around(Tile::new(2, 2, 0), 2, 2);
        // 4 footprint tiles + 2 adjacent tiles per side.
        assert_eq!(s.len(), 12);
        assert!(s.contains(Tile::new(1, 3, 0)));
        assert!(s.contains(Tile::new(4, 2, 0)));
        assert!(!s.contains(Tile::new(1, 1, 0)));
        assert!(!s.contains(Tile::new(4, 4, 0)));
    }

    #[test]
    fn south_west_prefers_west_on_ties() {
        let s = TargetSet::around(Tile::new(5, 5, 0), 1, 1);
        assert_eq!(s.south_west(), Some(Tile::new(4, 5, 0)));
        assert_eq!(TargetSet::new().south_west(), None);
    }

    #[test]
    fn nearest_distance() {
        let s: TargetSet = [Tile::new(0, 0, 0), Tile::new(10, 0, 0)].into_iter().collect();
        assert_eq!(s.nearest_distance_squared(Tile::new(7, 1, 0)), Some(10));
        assert_eq!(TargetSet::new().nearest_distance_squared(Tile::new(0, 0, 0)), None);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut s = TargetSet::single(Tile::new(1, 1, 0));
        s.insert(Tile::new(1, 1, 0));
        assert_eq!(s.len(), 1);
        assert_eq!(s.tiles(), &[Tile::new(1, 1, 0)]);
    }
}
