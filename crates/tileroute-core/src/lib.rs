//! **tileroute-core**: core types for tile-based movement routing.
//!
//! This crate provides the foundational types shared by the *tileroute*
//! crates: tile coordinates with height levels, the 8-way [`Direction`],
//! rectangular footprints ([`Area`]) and the entities that occupy them.

pub mod direction;
pub mod entity;
pub mod geom;

pub use direction::Direction;
pub use entity::{EntityId, MoverClass, Occupant};
pub use geom::{Area, AreaIter, RouteCoordinates, Tile};
