use tileroute_core::{Direction, RouteCoordinates, Tile};

use crate::checkpoints::extract_checkpoints;
use crate::error::RouteError;
use crate::mover::Mover;
use crate::router::{NO_PARENT, Router};
use crate::target::TargetSet;
use crate::traits::CollisionOracle;

impl Router {
    /// Route `mover` from `source` to the melee approach of the
    /// `dest_width` × `dest_length` footprint anchored at `destination`.
    ///
    /// Returns at most [`max_checkpoints`](crate::RouteConfig::max_checkpoints)
    /// waypoints, the last of which lies in the target set. An empty route
    /// means the mover is out of range, already arrived, or stuck. When no
    /// exact route exists and `can_be_stuck` is `false`, the best reachable
    /// tile near the destination is routed to instead.
    ///
    /// Destinations more than
    /// [`max_route_distance`](crate::RouteConfig::max_route_distance) away on
    /// either axis are rejected without consulting any oracle.
    #[allow(clippy::too_many_arguments)]
    pub fn find_path<C: CollisionOracle + ?Sized>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        destination: Tile,
        dest_width: i32,
        dest_length: i32,
        can_be_stuck: bool,
    ) -> Result<Vec<RouteCoordinates>, RouteError> {
        mover.validate()?;
        RouteError::check_size("width", dest_width)?;
        RouteError::check_size("length", dest_length)?;
        RouteError::check_height(source.height, destination.height)?;

        let (dx, dz) = source.delta_to(destination);
        let limit = self.config.max_route_distance;
        if dx.abs() > limit || dz.abs() > limit {
            log::debug!("destination {destination} is out of routing range of {source}");
            return Ok(Vec::new());
        }

        let targets = TargetSet::around(destination, dest_width, dest_length);
        self.route(collision, mover, source, &targets, can_be_stuck)
    }

    /// Route `mover` from `source` to any tile of `targets`.
    ///
    /// Same search and failure policy as [`find_path`](Self::find_path), but
    /// against a caller-built target set and without the range cut-off.
    pub fn find_path_to<C: CollisionOracle + ?Sized>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        targets: &TargetSet,
        can_be_stuck: bool,
    ) -> Result<Vec<RouteCoordinates>, RouteError> {
        mover.validate()?;
        let Some(first) = targets.tiles().first() else {
            return Ok(Vec::new());
        };
        if !targets.tiles().iter().any(|t| t.height == source.height) {
            return Err(RouteError::HeightMismatch {
                source_height: source.height,
                destination_height: first.height,
            });
        }
        self.route(collision, mover, source, targets, can_be_stuck)
    }

    fn route<C: CollisionOracle + ?Sized>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        targets: &TargetSet,
        can_be_stuck: bool,
    ) -> Result<Vec<RouteCoordinates>, RouteError> {
        if let Some(path) = self.search(collision, mover, source, |t| targets.contains(t)) {
            return Ok(extract_checkpoints(&path, self.config.max_checkpoints));
        }
        if can_be_stuck {
            log::debug!("no route from {source}; mover stays stuck");
            return Ok(Vec::new());
        }
        Ok(self.fallback(collision, mover, source, targets))
    }

    /// Shortest route from `source` to the first tile satisfying `goal`,
    /// excluding `source` itself. `None` if the window holds no such tile.
    pub(crate) fn search<C, G>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        goal: G,
    ) -> Option<Vec<Tile>>
    where
        C: CollisionOracle + ?Sized,
        G: Fn(Tile) -> bool,
    {
        let found = self.explore(collision, mover, source, goal, i32::MAX)?;
        Some(self.reconstruct(found))
    }

    /// Breadth-first expansion from `source` in [`Direction::ROUTE_ORDER`].
    ///
    /// Stops at the first dequeued tile satisfying `goal` and returns its
    /// index. Tiles at distance `dist_limit` or more are never recorded.
    /// Every reached tile keeps its distance and parent until the next
    /// search begins.
    pub(crate) fn explore<C, G>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        goal: G,
        dist_limit: i32,
    ) -> Option<usize>
    where
        C: CollisionOracle + ?Sized,
        G: Fn(Tile) -> bool,
    {
        self.begin(source);
        let cur_gen = self.generation;
        let si = self.idx(source)?;
        {
            let n = &mut self.nodes[si];
            n.parent = NO_PARENT;
            n.dist = 0;
            n.generation = cur_gen;
        }
        self.queue.push_back(si);

        let class = mover.class();
        let mut occupants = std::mem::take(&mut self.occupants);
        let mut reached = 1usize;

        let found = loop {
            let Some(ci) = self.queue.pop_front() else {
                break None;
            };
            let ct = self.tile(ci);
            if goal(ct) {
                break Some(ci);
            }

            let nd = self.nodes[ci].dist + 1;
            if nd >= dist_limit {
                continue;
            }

            for dir in Direction::ROUTE_ORDER {
                let nt = ct.step(dir);
                let Some(ni) = self.idx(nt) else {
                    continue;
                };
                if self.nodes[ni].generation == cur_gen {
                    continue;
                }
                if !collision.can_traverse(ct, dir, class, mover.size) {
                    continue;
                }
                if mover.blocked_at(nt, &mut occupants) {
                    continue;
                }
                let n = &mut self.nodes[ni];
                n.parent = ci;
                n.dist = nd;
                n.generation = cur_gen;
                self.queue.push_back(ni);
                reached += 1;
            }
        };

        self.occupants = occupants;
        log::trace!("search from {source} reached {reached} tiles");
        found
    }

    /// Walk parent links from `idx` back to the source.
    fn reconstruct(&self, idx: usize) -> Vec<Tile> {
        let mut path = Vec::new();
        let mut ci = idx;
        while self.nodes[ci].parent != NO_PARENT {
            path.push(self.tile(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
