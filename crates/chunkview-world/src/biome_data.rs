//! In-memory biome storage variants.
//!
//! Each variant maps chunk-local block coordinates to a palette id at a
//! different resolution. 0 means "never written"; queries outside a variant's
//! supported range also answer 0 so consumers never special-case the world
//! height of the save format that happened to be on disk. Storage layout
//! (which axis varies fastest, how sections are keyed) is internal to each
//! variant.

use std::collections::HashMap;

/// Blocks per chunk edge.
const CHUNK_XZ: usize = 16;

/// Quarts per section edge (a quart is a 4x4x4 block cube).
const QUARTS_XZ: usize = 4;

/// Quarts in one 16x16x16 section.
const SECTION_QUARTS: usize = QUARTS_XZ * QUARTS_XZ * QUARTS_XZ;

/// Quantize a chunk-local block coordinate to its quart index in [0, 4).
fn quart(coord: i32) -> usize {
    ((coord & 15) >> 2) as usize
}

/// Biome storage for one chunk, in whichever shape the save format needs.
#[derive(Debug, Clone)]
pub enum BiomeData {
    /// One id per (x, z) column; y is ignored.
    Simple2d(Simple2d),
    /// One id per quart, fixed y range [0, 255].
    FixedQuart(FixedQuart),
    /// One id per quart, unbounded y via lazily-allocated sections.
    SparseQuart(SparseQuart),
    /// No per-position state; every query answers the one id.
    Unknown { id: u32 },
}

impl BiomeData {
    /// Palette id at a chunk-local position. Never panics; unsupported or
    /// never-written positions answer 0.
    pub fn get_biome(&self, x: i32, y: i32, z: i32) -> u32 {
        match self {
            BiomeData::Simple2d(d) => d.get(x, z),
            BiomeData::FixedQuart(d) => d.get(x, y, z),
            BiomeData::SparseQuart(d) => d.get(x, y, z),
            BiomeData::Unknown { id } => *id,
        }
    }

    /// Store a palette id at a chunk-local position. A no-op outside the
    /// variant's supported range.
    pub fn set_biome_at(&mut self, x: i32, y: i32, z: i32, id: u32) {
        match self {
            BiomeData::Simple2d(d) => d.set(x, z, id),
            BiomeData::FixedQuart(d) => d.set(x, y, z, id),
            BiomeData::SparseQuart(d) => d.set(x, y, z, id),
            BiomeData::Unknown { .. } => {}
        }
    }

    /// Reset to the all-default (0) state.
    pub fn clear(&mut self) {
        match self {
            BiomeData::Simple2d(d) => d.clear(),
            BiomeData::FixedQuart(d) => d.clear(),
            BiomeData::SparseQuart(d) => d.clear(),
            BiomeData::Unknown { id } => *id = 0,
        }
    }
}

/// 2D biome storage, one id per column.
#[derive(Debug, Clone)]
pub struct Simple2d {
    ids: [u32; CHUNK_XZ * CHUNK_XZ],
}

impl Simple2d {
    pub fn new() -> Self {
        Self {
            ids: [0; CHUNK_XZ * CHUNK_XZ],
        }
    }

    fn index(x: i32, z: i32) -> usize {
        (((z & 15) << 4) | (x & 15)) as usize
    }

    pub fn get(&self, x: i32, z: i32) -> u32 {
        self.ids[Self::index(x, z)]
    }

    pub fn set(&mut self, x: i32, z: i32, id: u32) {
        self.ids[Self::index(x, z)] = id;
    }

    pub fn clear(&mut self) {
        self.ids.fill(0);
    }
}

impl Default for Simple2d {
    fn default() -> Self {
        Self::new()
    }
}

/// Dense quart-resolution storage for the legacy fixed height range [0, 255].
///
/// Layout: 4x4 quarts horizontally, 64 vertically; z varies fastest. This is
/// the legacy on-disk ordering and stays private to this variant.
#[derive(Debug, Clone)]
pub struct FixedQuart {
    ids: Box<[u32; QUARTS_XZ * QUARTS_XZ * 64]>,
}

impl FixedQuart {
    pub fn new() -> Self {
        Self {
            ids: Box::new([0; QUARTS_XZ * QUARTS_XZ * 64]),
        }
    }

    fn index(x: i32, y: i32, z: i32) -> usize {
        (y as usize >> 2) * (QUARTS_XZ * QUARTS_XZ) + quart(x) * QUARTS_XZ + quart(z)
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> u32 {
        if !(0..256).contains(&y) {
            return 0;
        }
        self.ids[Self::index(x, y, z)]
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, id: u32) {
        if !(0..256).contains(&y) {
            return;
        }
        self.ids[Self::index(x, y, z)] = id;
    }

    pub fn clear(&mut self) {
        self.ids.fill(0);
    }
}

impl Default for FixedQuart {
    fn default() -> Self {
        Self::new()
    }
}

/// Sparse quart-resolution storage with unbounded y.
///
/// 16-block sections keyed by `y >> 4` are allocated on first nonzero write,
/// so a chunk that is mostly one default biome stays cheap. Within a section
/// x varies fastest.
#[derive(Debug, Clone, Default)]
pub struct SparseQuart {
    sections: HashMap<i32, Box<[u32; SECTION_QUARTS]>>,
}

impl SparseQuart {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(x: i32, y: i32, z: i32) -> usize {
        quart(y) * (QUARTS_XZ * QUARTS_XZ) + quart(z) * QUARTS_XZ + quart(x)
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> u32 {
        match self.sections.get(&(y >> 4)) {
            Some(section) => section[Self::index(x, y, z)],
            None => 0,
        }
    }

    /// Writing 0 is a no-op: a never-allocated section already answers 0, so
    /// default-valued writes never force an allocation.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: u32) {
        if id == 0 {
            return;
        }
        let section = self
            .sections
            .entry(y >> 4)
            .or_insert_with(|| Box::new([0; SECTION_QUARTS]));
        section[Self::index(x, y, z)] = id;
    }

    /// Dropping the sections is equivalent to zero-filling and cheaper.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    #[cfg(test)]
    fn section_count(&self) -> usize {
        self.sections.len()
    }
}
