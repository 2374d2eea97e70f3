use tileroute_core::{Direction, RouteCoordinates, Tile};

/// Compress a step-by-step path into direction-change waypoints.
///
/// Paths of two tiles or fewer are returned as they are. Longer paths keep
/// their first tile, every corner (a tile whose incoming and outgoing
/// directions differ) and their last tile. At most `max` waypoints are
/// returned; once corners would crowd it out, the remaining corners are
/// dropped so the last tile still fits. A single slot holds the last tile.
pub fn extract_checkpoints(path: &[Tile], max: usize) -> Vec<RouteCoordinates> {
    let Some(&end) = path.last() else {
        return Vec::new();
    };
    match max {
        0 => return Vec::new(),
        1 => return vec![end.into()],
        _ => {}
    }
    if path.len() <= 2 {
        return path.iter().map(|&t| t.into()).collect();
    }

    let last = path.len() - 1;
    let mut out = Vec::with_capacity(max.min(path.len()));
    out.push(path[0].into());

    for i in 1..last {
        if out.len() + 1 >= max {
            break;
        }
        let incoming = Direction::between(path[i - 1], path[i]);
        let outgoing = Direction::between(path[i], path[i + 1]);
        if incoming != outgoing {
            out.push(path[i].into());
        }
    }

    if out.len() < max {
        out.push(path[last].into());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(x: i32, z: i32) -> Tile {
        Tile::new(x, z, 0)
    }

    fn c(x: i32, z: i32) -> RouteCoordinates {
        RouteCoordinates::new(x, z, 0)
    }

    #[test]
    fn short_paths_are_untouched() {
        assert!(extract_checkpoints(&[], 25).is_empty());
        assert_eq!(extract_checkpoints(&[t(1, 1)], 25), vec![c(1, 1)]);
        assert_eq!(
            extract_checkpoints(&[t(1, 1), t(2, 1)], 25),
            vec![c(1, 1), c(2, 1)]
        );
    }

    #[test]
    fn straight_line_keeps_ends() {
        let path: Vec<_> = (1..=6).map(|x| t(x, 0)).collect();
        assert_eq!(extract_checkpoints(&path, 25), vec![c(1, 0), c(6, 0)]);
    }

    #[test]
    fn corners_are_kept() {
        let path = [t(1, 0), t(2, 0), t(3, 1), t(4, 2), t(4, 3), t(4, 4)];
        assert_eq!(
            extract_checkpoints(&path, 25),
            vec![c(1, 0), c(2, 0), c(4, 2), c(4, 4)]
        );
    }

    #[test]
    fn cap_leaves_room_for_the_end() {
        // A staircase turns at every tile.
        let mut path = Vec::new();
        for i in 0..20 {
            path.push(t(i, i));
            path.push(t(i + 1, i));
        }
        let out = extract_checkpoints(&path, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], c(0, 0));
        assert_eq!(out[3], c(2, 1));
        assert_eq!(out[4], RouteCoordinates::from(*path.last().unwrap()));
    }

    #[test]
    fn zero_cap() {
        assert!(extract_checkpoints(&[t(0, 0), t(1, 0), t(2, 1)], 0).is_empty());
    }

    #[test]
    fn single_slot_holds_the_end() {
        let path = [t(0, 0), t(1, 0), t(2, 1), t(2, 2)];
        assert_eq!(extract_checkpoints(&path, 1), vec![c(2, 2)]);
        assert_eq!(extract_checkpoints(&path[..2], 1), vec![c(1, 0)]);
        assert_eq!(extract_checkpoints(&path, 2), vec![c(0, 0), c(2, 2)]);
    }
}
