//! Reference world for tileroute: a collision-flag map and an occupant
//! index, implementing [`CollisionOracle`](tileroute_paths::CollisionOracle)
//! and [`OccupancyOracle`](tileroute_paths::OccupancyOracle).

pub mod collision;
pub mod flags;
pub mod occupancy;

pub use collision::CollisionMap;
pub use flags::CollisionFlags;
pub use occupancy::{CHUNK_SIZE, IndexError, OccupantIndex};
