//! Small collision grids for unit tests.

use std::cell::Cell;
use std::collections::HashSet;

use tileroute_core::{Area, Direction, MoverClass, Tile};

use crate::traits::CollisionOracle;

/// A `width` × `length` grid on height 0 with blocked tiles. Everything
/// outside the grid is blocked. Diagonal steps need both axial neighbours
/// free.
pub(crate) struct TestGrid {
    width: i32,
    length: i32,
    blocked: HashSet<(i32, i32)>,
    pub(crate) queries: Cell<usize>,
}

impl TestGrid {
    pub(crate) fn open(width: i32, length: i32) -> Self {
        Self {
            width,
            length,
            blocked: HashSet::new(),
            queries: Cell::new(0),
        }
    }

    pub(crate) fn block(&mut self, x: i32, z: i32) {
        self.blocked.insert((x, z));
    }

    /// Block the inclusive rectangle `(x0, z0)`–`(x1, z1)`.
    pub(crate) fn block_rect(&mut self, x0: i32, z0: i32, x1: i32, z1: i32) {
        for x in x0..=x1 {
            for z in z0..=z1 {
                self.block(x, z);
            }
        }
    }

    pub(crate) fn is_free(&self, t: Tile) -> bool {
        t.height == 0
            && t.x >= 0
            && t.x < self.width
            && t.z >= 0
            && t.z < self.length
            && !self.blocked.contains(&(t.x, t.z))
    }

    fn footprint_free(&self, anchor: Tile, size: i32) -> bool {
        Area::square(anchor, size).iter().all(|t| self.is_free(t))
    }
}

impl CollisionOracle for TestGrid {
    fn can_traverse(&self, from: Tile, dir: Direction, _class: MoverClass, size: i32) -> bool {
        self.queries.set(self.queries.get() + 1);
        if !self.footprint_free(from.step(dir), size) {
            return false;
        }
        match dir.components() {
            (Some(x), Some(z)) => {
                self.footprint_free(from.step(x), size) && self.footprint_free(from.step(z), size)
            }
            _ => true,
        }
    }
}

/// Tile shorthand on height 0.
pub(crate) fn t(x: i32, z: i32) -> Tile {
    Tile::new(x, z, 0)
}
