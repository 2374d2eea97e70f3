//! Movement routing for tile-based game servers.
//!
//! This crate computes walkable routes for entities of any square size on a
//! tiled map with height levels:
//!
//! - **Bounded BFS** towards a target region ([`Router::find_path`],
//!   [`Router::find_path_to`]), with an NPC size-hierarchy blocking rule and a
//!   bounded fallback search when no exact route exists
//! - **Waypoint compression** into direction-change checkpoints
//!   ([`extract_checkpoints`])
//! - **Follow mode**, a greedy stepper between known waypoints
//!   ([`find_follow_path`], [`expand_route`])
//!
//! Searches run through [`Router`], which owns and recycles its scratch
//! buffers so that repeated queries incur no allocations after warm-up.
//!
//! # Oracles
//!
//! | Trait | Consulted for |
//! |---|---|
//! | [`CollisionOracle`] | every step of every search |
//! | [`OccupancyOracle`] | NPC movers only, via [`MoverKind::Npc`] |

mod bfs;
mod checkpoints;
mod config;
mod error;
mod fallback;
mod follow;
mod mover;
mod router;
mod target;
mod traits;

#[cfg(test)]
mod testutil;

pub use checkpoints::extract_checkpoints;
pub use config::RouteConfig;
pub use error::RouteError;
pub use follow::{expand_route, find_follow_path};
pub use mover::{Mover, MoverKind};
pub use router::Router;
pub use target::TargetSet;
pub use traits::{CollisionOracle, OccupancyOracle};
