use tileroute_core::{Direction, MoverClass, RouteCoordinates, Tile};

use crate::error::RouteError;
use crate::traits::CollisionOracle;

/// Step greedily from `source` towards `destination`.
///
/// Each step tries the diagonal towards the destination first, then the
/// axial step along whichever axis has more ground left to cover (x on
/// ties). The walk stops at the destination or at the first tile where
/// neither step is allowed, so a short result is a valid partial route.
/// `source` is not part of the result.
pub fn find_follow_path<C: CollisionOracle + ?Sized>(
    collision: &C,
    source: Tile,
    destination: Tile,
    class: MoverClass,
    size: i32,
) -> Result<Vec<RouteCoordinates>, RouteError> {
    RouteError::check_size("size", size)?;
    RouteError::check_height(source.height, destination.height)?;

    let mut path = Vec::new();
    let mut cur = source;
    while cur != destination {
        let Some(dir) = next_step(collision, cur, destination, class, size) else {
            log::trace!("follow from {source} to {destination} halted at {cur}");
            break;
        };
        cur = cur.step(dir);
        path.push(cur.into());
    }
    Ok(path)
}

fn next_step<C: CollisionOracle + ?Sized>(
    collision: &C,
    cur: Tile,
    destination: Tile,
    class: MoverClass,
    size: i32,
) -> Option<Direction> {
    let (dx, dz) = cur.delta_to(destination);
    let (sx, sz) = (dx.signum(), dz.signum());

    if sx != 0 && sz != 0 {
        let diagonal = Direction::from_delta(sx, sz)?;
        if collision.can_traverse(cur, diagonal, class, size) {
            return Some(diagonal);
        }
    }

    let axial = if dx.abs() >= dz.abs() {
        Direction::from_delta(sx, 0)?
    } else {
        Direction::from_delta(0, sz)?
    };
    collision
        .can_traverse(cur, axial, class, size)
        .then_some(axial)
}

/// Expand a waypoint list into single steps by following each waypoint in
/// turn from `source`.
///
/// Expansion stops after the first hop that falls short of its waypoint;
/// the steps taken so far are returned.
pub fn expand_route<C: CollisionOracle + ?Sized>(
    collision: &C,
    source: Tile,
    waypoints: &[RouteCoordinates],
    class: MoverClass,
    size: i32,
) -> Result<Vec<RouteCoordinates>, RouteError> {
    RouteError::check_size("size", size)?;

    let mut steps = Vec::new();
    let mut cur = source;
    for &wp in waypoints {
        let target = Tile::from(wp);
        let hop = find_follow_path(collision, cur, target, class, size)?;
        let reached = hop.last().map_or(cur, |&c| Tile::from(c));
        steps.extend(hop);
        if reached != target {
            break;
        }
        cur = target;
    }
    Ok(steps)
}
