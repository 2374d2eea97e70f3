use std::collections::VecDeque;

use tileroute_core::{Area, Occupant, Tile};

use crate::config::RouteConfig;

/// Per-tile search record, valid only while `generation` matches the
/// router's current search.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) parent: usize,
    pub(crate) dist: i32,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            dist: 0,
            generation: 0,
        }
    }
}

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Central coordinator for route searches.
///
/// `Router` owns the scratch state of a search (visited marks, parent links,
/// distances, the BFS queue and the occupant buffer) sized to the search
/// window, so repeated queries incur no allocations after the first use.
/// Nothing survives from one search to the next: every search starts by
/// invalidating the previous one's records.
///
/// A `Router` serves one search at a time (`&mut self`); keep one per
/// worker.
pub struct Router {
    pub(crate) config: RouteConfig,
    /// Side of the square window, `2 * window_radius + 1`.
    pub(crate) side: usize,
    /// Window of the search in progress, centred on its source.
    pub(crate) window: Area,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) occupants: Vec<Occupant>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// A router using [`RouteConfig::default`].
    pub fn new() -> Self {
        Self::with_config(RouteConfig::default())
    }

    /// A router with custom search bounds.
    pub fn with_config(config: RouteConfig) -> Self {
        let radius = config.window_radius.max(0);
        let side = (2 * radius + 1) as usize;
        Self {
            config,
            side,
            window: Area::default(),
            nodes: vec![Node::default(); side * side],
            generation: 0,
            queue: VecDeque::with_capacity(side * 4),
            occupants: Vec::new(),
        }
    }

    /// The bounds this router searches with.
    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Start a new search centred on `source`, lazily invalidating every
    /// record of the previous one.
    pub(crate) fn begin(&mut self, source: Tile) {
        self.window = Area::centered(source, self.config.window_radius.max(0));
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale records could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.queue.clear();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a tile to a flat index. Returns `None` outside the window.
    #[inline]
    pub(crate) fn idx(&self, t: Tile) -> Option<usize> {
        if !self.window.contains(t) {
            return None;
        }
        let x = (t.x - self.window.min.x) as usize;
        let z = (t.z - self.window.min.z) as usize;
        Some(x * self.side + z)
    }

    /// Convert a flat index back to a tile.
    #[inline]
    pub(crate) fn tile(&self, idx: usize) -> Tile {
        let x = (idx / self.side) as i32 + self.window.min.x;
        let z = (idx % self.side) as i32 + self.window.min.z;
        Tile::new(x, z, self.window.min.height)
    }

    /// Whether `idx` was reached by the current search.
    #[inline]
    pub(crate) fn visited(&self, idx: usize) -> bool {
        self.nodes[idx].generation == self.generation
    }

    /// Distance from the current source, if the current search reached `t`.
    pub(crate) fn distance_at(&self, t: Tile) -> Option<i32> {
        let i = self.idx(t)?;
        if self.visited(i) {
            Some(self.nodes[i].dist)
        } else {
            None
        }
    }
}
