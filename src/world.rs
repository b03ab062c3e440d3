// KujiraPixel
// copyright kujira project 2026

//! The sparse tile world: a fixed number of walkable coordinates produced by
//! a biased random walk, stored sorted by a flattened key for O(log n)
//! membership queries. Immutable once generated; `is_walkable` is the sole
//! collision primitive used by movement rules and by the view painter.

use crate::{util::Rand, MAP_HEIGHT, MAP_LENGTH, MAP_WIDTH};
use std::collections::HashSet;

/// A walkable coordinate plus its flattened ordering key. The key is an
/// implementation detail of the index and never leaves this module.
#[derive(Debug, Clone, Copy)]
struct Tile {
    x: i32,
    y: i32,
    key: i64,
}

fn flat_key(x: i32, y: i32) -> i64 {
    y as i64 * MAP_WIDTH as i64 + x as i64
}

/// Default is an empty index with no walkable tiles, the state before a
/// world has been generated.
#[derive(Default)]
pub struct WorldIndex {
    tiles: Vec<Tile>,
}

impl WorldIndex {
    /// Build a world by biased random walk from (0, 0): each step moves one
    /// unit, with probability 4/5 in a uniformly chosen cardinal direction
    /// and 1/5 in a bias direction re-rolled every 20 steps. Coordinates are
    /// clamped to the map's bounding box. The walk runs until MAP_LENGTH
    /// distinct coordinates have been visited, then the set is sorted by key.
    pub fn generate(rng: &mut Rand) -> Self {
        let max_x = MAP_WIDTH / 2;
        let min_x = -max_x;
        let max_y = MAP_HEIGHT / 2;
        let min_y = -max_y;

        let mut seen: HashSet<(i32, i32)> = HashSet::with_capacity(MAP_LENGTH);
        let mut tiles: Vec<Tile> = Vec::with_capacity(MAP_LENGTH);
        let mut x = 0i32;
        let mut y = 0i32;
        let mut bias = 0u32;
        let mut step = 0u64;

        while tiles.len() < MAP_LENGTH {
            if seen.insert((x, y)) {
                tiles.push(Tile {
                    x,
                    y,
                    key: flat_key(x, y),
                });
            }
            if step % 20 == 0 {
                bias = rng.rand() % 4;
            }
            step += 1;
            let roll = rng.rand() % 5;
            let dir = if roll == 4 { bias } else { roll };
            match dir {
                0 => x += 1,
                1 => x -= 1,
                2 => y += 1,
                _ => y -= 1,
            }
            x = x.clamp(min_x, max_x);
            y = y.clamp(min_y, max_y);
        }

        tiles.sort_by_key(|t| t.key);
        Self { tiles }
    }

    /// Binary search over the sorted keys. Any coordinate not in the set,
    /// including coordinates far outside the generated bounding box, is
    /// simply not walkable; this is not an error.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tiles
            .binary_search_by_key(&flat_key(x, y), |t| t.key)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
