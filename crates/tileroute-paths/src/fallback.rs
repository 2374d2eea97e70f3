use tileroute_core::{Area, RouteCoordinates, Tile};

use crate::checkpoints::extract_checkpoints;
use crate::mover::Mover;
use crate::router::Router;
use crate::target::TargetSet;
use crate::traits::CollisionOracle;

impl Router {
    /// Best-effort route used when the target set cannot be reached.
    ///
    /// Every tile reachable within
    /// [`fallback_max_distance`](crate::RouteConfig::fallback_max_distance)
    /// steps and lying within
    /// [`fallback_radius`](crate::RouteConfig::fallback_radius) of the
    /// target set's south-west tile is a candidate. The candidate closest to
    /// the source wins, then the one closest to any target tile, then the
    /// first in west-major scan order. The chosen tile is routed to like any
    /// other destination.
    pub(crate) fn fallback<C: CollisionOracle + ?Sized>(
        &mut self,
        collision: &C,
        mover: &Mover<'_>,
        source: Tile,
        targets: &TargetSet,
    ) -> Vec<RouteCoordinates> {
        let Some(center) = targets.south_west() else {
            return Vec::new();
        };
        let limit = self.config.fallback_max_distance;
        self.explore(collision, mover, source, |_| false, limit);

        // (steps from source, squared distance to target, tile)
        let mut best: Option<(i32, i64, Tile)> = None;
        for candidate in Area::centered(center, self.config.fallback_radius) {
            let Some(steps) = self.distance_at(candidate) else {
                continue;
            };
            if steps >= limit {
                continue;
            }
            let Some(to_target) = targets.nearest_distance_squared(candidate) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((s, d, _)) => (steps, to_target) < (s, d),
            };
            if better {
                best = Some((steps, to_target, candidate));
            }
        }

        let Some((steps, _, chosen)) = best else {
            log::debug!("no fallback tile near {center} is reachable from {source}");
            return Vec::new();
        };
        log::debug!("falling back to {chosen}, {steps} steps from {source}");
        if chosen == source {
            return Vec::new();
        }

        let path = self
            .search(collision, mover, source, |t| t == chosen)
            .unwrap_or_default();
        extract_checkpoints(&path, self.config.max_checkpoints)
    }
}
