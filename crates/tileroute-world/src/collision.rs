//! A dense collision map with one flag layer per height level.
//!
//! [`CollisionMap`] stores a [`CollisionFlags`] value for every tile of a
//! `width` × `length` region on each of its height levels. Tiles outside
//! the map count as unloaded and can never be entered.

use tileroute_core::{Area, Direction, MoverClass, Tile};
use tileroute_paths::CollisionOracle;

use crate::flags::CollisionFlags;

/// Collision flags for a rectangular map with several height levels.
#[derive(Debug, Clone)]
pub struct CollisionMap {
    width: i32,
    length: i32,
    heights: i32,
    flags: Vec<CollisionFlags>,
}

impl CollisionMap {
    /// Create an open map: every tile in bounds is walkable.
    pub fn new(width: i32, length: i32, heights: i32) -> Self {
        let (width, length, heights) = (width.max(0), length.max(0), heights.max(0));
        let len = (width as usize) * (length as usize) * (heights as usize);
        Self {
            width,
            length,
            heights,
            flags: vec![CollisionFlags::NONE; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Number of height levels.
    pub fn heights(&self) -> i32 {
        self.heights
    }

    /// Whether `t` lies inside the map.
    pub fn contains(&self, t: Tile) -> bool {
        t.x >= 0
            && t.x < self.width
            && t.z >= 0
            && t.z < self.length
            && t.height >= 0
            && t.height < self.heights
    }

    fn index(&self, t: Tile) -> Option<usize> {
        if !self.contains(t) {
            return None;
        }
        let layer = (t.height as usize) * (self.width as usize) * (self.length as usize);
        Some(layer + (t.z as usize) * (self.width as usize) + t.x as usize)
    }

    /// Flags at `t`, or `None` if out of bounds.
    pub fn flags(&self, t: Tile) -> Option<CollisionFlags> {
        self.index(t).map(|i| self.flags[i])
    }

    /// Replace the flags at `t`. Does nothing if out of bounds.
    pub fn set_flags(&mut self, t: Tile, flags: CollisionFlags) {
        if let Some(i) = self.index(t) {
            self.flags[i] = flags;
        }
    }

    /// Add `flags` at `t`. Does nothing if out of bounds.
    pub fn add_flags(&mut self, t: Tile, flags: CollisionFlags) {
        if let Some(i) = self.index(t) {
            self.flags[i] = self.flags[i] | flags;
        }
    }

    /// Clear `flags` at `t`. Does nothing if out of bounds.
    pub fn remove_flags(&mut self, t: Tile, flags: CollisionFlags) {
        if let Some(i) = self.index(t) {
            self.flags[i] = self.flags[i] & !flags;
        }
    }

    /// Mark `t` as impassable.
    pub fn block(&mut self, t: Tile) {
        self.add_flags(t, CollisionFlags::BLOCKED);
    }

    /// Mark every tile of `area` as impassable.
    pub fn block_area(&mut self, area: Area) {
        for t in area {
            self.block(t);
        }
    }

    /// Put a wall on the edge between `t` and its neighbour towards `dir`.
    ///
    /// Both sides of the edge are flagged. Only cardinal directions name an
    /// edge; diagonals are ignored.
    pub fn add_wall(&mut self, t: Tile, dir: Direction) {
        let Some(flag) = CollisionFlags::wall(dir) else {
            log::warn!("ignoring wall towards diagonal {dir:?} at {t}");
            return;
        };
        self.add_flags(t, flag);
        if let Some(back) = CollisionFlags::wall(dir.opposite()) {
            self.add_flags(t.step(dir), back);
        }
    }

    /// Whether a mover of `class` may stand on `t`.
    fn standable(&self, t: Tile, class: MoverClass) -> bool {
        let Some(f) = self.flags(t) else {
            return false;
        };
        if f.contains(CollisionFlags::BLOCKED) {
            return false;
        }
        !(class == MoverClass::Npc && f.contains(CollisionFlags::NPC_BLOCKED))
    }

    /// One cardinal step of a `size` footprint anchored at `from`: every tile
    /// on the leading edge must be free of a wall towards `dir`, and every
    /// tile just beyond it must be standable.
    fn axial_step(&self, from: Tile, dir: Direction, class: MoverClass, size: i32) -> bool {
        let Some(wall) = CollisionFlags::wall(dir) else {
            return false;
        };
        (0..size).all(|k| {
            let edge = match dir {
                Direction::East => from.shift(size - 1, k),
                Direction::West => from.shift(0, k),
                Direction::North => from.shift(k, size - 1),
                _ => from.shift(k, 0),
            };
            let open = self
                .flags(edge)
                .is_some_and(|f| !f.contains(wall));
            open && self.standable(edge.step(dir), class)
        })
    }
}

impl CollisionOracle for CollisionMap {
    /// Diagonal steps need both axial components and both corner routes to
    /// be clear, so movers never clip wall ends or blocked corners.
    fn can_traverse(&self, from: Tile, dir: Direction, class: MoverClass, size: i32) -> bool {
        if size < 1 {
            return false;
        }
        match dir.components() {
            (Some(x), Some(z)) => {
                self.axial_step(from, x, class, size)
                    && self.axial_step(from, z, class, size)
                    && self.axial_step(from.step(x), z, class, size)
                    && self.axial_step(from.step(z), x, class, size)
            }
            _ => self.axial_step(from, dir, class, size),
        }
    }
}
