//! Chunk-bucketed index of the entities standing on the map.

use std::collections::HashMap;

use thiserror::Error;
use tileroute_core::{EntityId, Occupant, Tile};
use tileroute_paths::OccupancyOracle;

/// Side of the square chunks occupants are bucketed by. Occupants may not be
/// larger than one chunk.
pub const CHUNK_SIZE: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("occupant {id:?} has size {size}, expected 1..={max}", max = CHUNK_SIZE)]
    InvalidSize { id: EntityId, size: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChunkKey {
    cx: i32,
    cz: i32,
    height: i32,
}

impl ChunkKey {
    fn of(t: Tile) -> Self {
        Self {
            cx: t.x.div_euclid(CHUNK_SIZE),
            cz: t.z.div_euclid(CHUNK_SIZE),
            height: t.height,
        }
    }
}

/// Entities bucketed by the chunk of their anchor tile.
///
/// Lookups scan the 3×3 chunks around the queried tile, which finds every
/// occupant overlapping a footprint of up to [`CHUNK_SIZE`] anchored there.
#[derive(Debug, Clone, Default)]
pub struct OccupantIndex {
    chunks: HashMap<ChunkKey, Vec<Occupant>>,
    entries: HashMap<EntityId, Occupant>,
}

impl OccupantIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `occupant`, replacing any entry with the same id. Returns the
    /// replaced entry.
    pub fn insert(&mut self, occupant: Occupant) -> Result<Option<Occupant>, IndexError> {
        if occupant.size < 1 || occupant.size > CHUNK_SIZE {
            return Err(IndexError::InvalidSize {
                id: occupant.id,
                size: occupant.size,
            });
        }
        let previous = self.remove(occupant.id);
        self.chunks
            .entry(ChunkKey::of(occupant.tile))
            .or_default()
            .push(occupant);
        self.entries.insert(occupant.id, occupant);
        Ok(previous)
    }

    /// Remove the entity `id`, returning its last entry.
    pub fn remove(&mut self, id: EntityId) -> Option<Occupant> {
        let old = self.entries.remove(&id)?;
        let key = ChunkKey::of(old.tile);
        if let Some(bucket) = self.chunks.get_mut(&key) {
            bucket.retain(|o| o.id != id);
            if bucket.is_empty() {
                self.chunks.remove(&key);
            }
        }
        Some(old)
    }

    /// Move the entity `id` to a new anchor. Returns `false` if unknown.
    pub fn move_to(&mut self, id: EntityId, tile: Tile) -> bool {
        let Some(mut o) = self.remove(id) else {
            return false;
        };
        o.tile = tile;
        self.chunks.entry(ChunkKey::of(tile)).or_default().push(o);
        self.entries.insert(id, o);
        true
    }

    pub fn get(&self, id: EntityId) -> Option<&Occupant> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OccupancyOracle for OccupantIndex {
    fn occupants_near(&self, tile: Tile, buf: &mut Vec<Occupant>) {
        let center = ChunkKey::of(tile);
        for dcx in -1..=1 {
            for dcz in -1..=1 {
                let key = ChunkKey {
                    cx: center.cx + dcx,
                    cz: center.cz + dcz,
                    height: center.height,
                };
                if let Some(bucket) = self.chunks.get(&key) {
                    buf.extend_from_slice(bucket);
                }
            }
        }
    }
}
