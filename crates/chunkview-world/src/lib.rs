//! Chunk biome decoding for Minecraft Java Edition saves.
//!
//! Takes a chunk's NBT tag tree (any save format since beta) and produces
//! queryable per-position biome identities. Entry point: [`chunk::ChunkBiomes`].

pub mod biome;
pub mod biome_data;
pub mod biome_loader;
pub mod biome_palette;
pub mod bit_buffer;
pub mod chunk;

pub use biome::{biome_by_legacy_id, biome_by_resource_key, Biome, UNKNOWN};
pub use chunk::ChunkBiomes;
