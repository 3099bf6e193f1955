//! Per-chunk biome state as consumers see it.
//!
//! [`ChunkBiomes`] owns one chunk's decoded biome storage plus the palette
//! its ids resolve through, and answers biome queries by identity rather
//! than id. Reloading a chunk reuses the storage where the format allows.

use chunkview_nbt::NbtCompound;

use crate::biome::{Biome, UNKNOWN};
use crate::biome_data::BiomeData;
use crate::biome_loader::{load_biome_data, BiomeLoadError};
use crate::biome_palette::BiomePalette;

/// Decoded biome state for one chunk.
#[derive(Debug)]
pub struct ChunkBiomes {
    data: BiomeData,
    palette: BiomePalette,
}

impl ChunkBiomes {
    /// An empty chunk: every query answers the unknown biome until a load
    /// succeeds.
    pub fn new() -> Self {
        Self {
            data: BiomeData::Unknown { id: 0 },
            palette: BiomePalette::new(),
        }
    }

    /// Decode biome data from a chunk tag tree, replacing any previous
    /// contents. Sections entirely outside `[y_min, y_max]` are not decoded.
    ///
    /// On error the chunk should be treated as not loaded; partial state may
    /// remain but resolves consistently through the palette.
    pub fn load(
        &mut self,
        chunk: &NbtCompound,
        y_min: i32,
        y_max: i32,
    ) -> Result<(), BiomeLoadError> {
        self.palette.clear();
        load_biome_data(chunk, &mut self.data, &mut self.palette, y_min, y_max)
    }

    /// Biome at a chunk-local position. Positions never written resolve to
    /// whatever the palette registered first; on a chunk that decoded
    /// anything at all that is a real biome, otherwise [`UNKNOWN`].
    pub fn biome_at(&self, x: i32, y: i32, z: i32) -> &'static Biome {
        let id = self.data.get_biome(x, y, z);
        self.palette.get(id).unwrap_or(&UNKNOWN)
    }

    pub fn data(&self) -> &BiomeData {
        &self.data
    }

    pub fn palette(&self) -> &BiomePalette {
        &self.palette
    }
}

impl Default for ChunkBiomes {
    fn default() -> Self {
        Self::new()
    }
}
