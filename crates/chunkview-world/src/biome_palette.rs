//! Per-chunk biome palette.
//!
//! Deduplicates biome identities into small integers so the per-position
//! storage can hold a `u32` instead of a full identity. Palette ids are a
//! per-chunk compression artifact, never a durable global identifier.

use std::collections::HashMap;

use crate::biome::Biome;

/// Maps biome identities to small, insertion-ordered ids.
///
/// Mutated only while a chunk decodes; read-only afterward.
#[derive(Debug, Default)]
pub struct BiomePalette {
    by_key: HashMap<&'static str, u32>,
    biomes: Vec<&'static Biome>,
}

impl BiomePalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a biome, returning its id. Idempotent: a biome already in the
    /// palette answers the id it was first assigned. New ids continue from the
    /// current size.
    pub fn put(&mut self, biome: &'static Biome) -> u32 {
        if let Some(&id) = self.by_key.get(biome.resource_key) {
            return id;
        }
        let id = self.biomes.len() as u32;
        self.by_key.insert(biome.resource_key, id);
        self.biomes.push(biome);
        id
    }

    /// Resolve an id back to its biome.
    pub fn get(&self, id: u32) -> Option<&'static Biome> {
        self.biomes.get(id as usize).copied()
    }

    /// Number of distinct biomes registered so far.
    pub fn size(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Drop all registrations, ready for the next decode pass.
    pub fn clear(&mut self) {
        self.by_key.clear();
        self.biomes.clear();
    }
}
