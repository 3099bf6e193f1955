//! Chunk biome decoding: format detection and per-format decode.
//!
//! A chunk's biome data has been stored in several incompatible shapes over
//! the game's history. Detection probes the tag tree for the known shapes in
//! order; decode then fills a [`BiomeData`] variant matched to the shape,
//! registering identities in the chunk's [`BiomePalette`] as it goes. Format
//! anomalies degrade to default (0) ids instead of failing the chunk; only
//! packed-data corruption is a hard error.

use thiserror::Error;
use tracing::{debug, warn};

use chunkview_nbt::{NbtCompound, NbtTag};

use crate::biome::{biome_by_legacy_id, biome_by_resource_key, Biome, UNKNOWN};
use crate::biome_data::{BiomeData, FixedQuart, Simple2d, SparseQuart};
use crate::biome_palette::BiomePalette;
use crate::bit_buffer::BitBuffer;

/// Quarts along one axis of a section.
const QUARTS_XZ: i32 = 4;

#[derive(Debug, Error)]
pub enum BiomeLoadError {
    /// The packed long array ran out mid-section: bits-per-entry was computed
    /// from a palette that doesn't match the array, or the array is truncated.
    #[error("packed biome data exhausted in section y={section_y}")]
    PackedDataExhausted { section_y: i32 },
}

/// The on-disk biome encoding detected for one chunk, with the claimed data.
#[derive(Debug)]
pub enum BiomeFormat<'a> {
    /// Pre-1.13: one byte per column under `Level.Biomes`.
    Legacy2d(&'a [i8]),
    /// 1.15 - 21w38a: 1024 ints under `Level.Biomes`, 4x4 columns by 64
    /// quart layers.
    Quart3d1024(&'a [i32]),
    /// 1.13 - 1.14: one int per column under `Level.Biomes`.
    Legacy2dInt(&'a [i32]),
    /// 21w39a+: per-section palettes under `sections[].biomes`.
    Sectioned(&'a [NbtTag]),
    /// Nothing recognizable; the chunk falls back to the unknown biome.
    Unrecognized,
}

/// Probe the chunk tag tree for a known biome encoding. Checks are ordered;
/// the first shape that matches claims the chunk.
pub fn detect_format(chunk: &NbtCompound) -> BiomeFormat<'_> {
    let legacy_biomes = chunk
        .get("Level")
        .and_then(NbtTag::as_compound)
        .and_then(|level| level.get("Biomes"));

    if let Some(tag) = legacy_biomes {
        if let Some(bytes) = tag.as_byte_array() {
            if bytes.len() >= 256 {
                return BiomeFormat::Legacy2d(bytes);
            }
        }
        if let Some(ints) = tag.as_int_array() {
            if ints.len() >= 1024 {
                return BiomeFormat::Quart3d1024(ints);
            }
            if ints.len() >= 256 {
                return BiomeFormat::Legacy2dInt(ints);
            }
        }
    }

    if let Some(sections) = chunk.get("sections").and_then(NbtTag::as_list) {
        return BiomeFormat::Sectioned(sections);
    }

    BiomeFormat::Unrecognized
}

/// Decode a chunk's biome data into `data`, registering identities in
/// `palette`.
///
/// Sections entirely outside `[y_min, y_max]` are skipped; a never-written
/// region already answers 0, so the bound is purely a decode-cost cap. If the
/// cached `data` is already the right variant for the detected format it is
/// cleared and reused, otherwise replaced — a chunk reloaded after a
/// world-version change mid-session switches variants here.
pub fn load_biome_data(
    chunk: &NbtCompound,
    data: &mut BiomeData,
    palette: &mut BiomePalette,
    y_min: i32,
    y_max: i32,
) -> Result<(), BiomeLoadError> {
    match detect_format(chunk) {
        BiomeFormat::Legacy2d(bytes) => {
            ensure_simple_2d(data);
            decode_legacy_2d(data, palette, |i| i32::from(bytes[i] as u8));
            Ok(())
        }
        BiomeFormat::Quart3d1024(ints) => {
            ensure_fixed_quart(data);
            decode_quart_3d_1024(data, palette, ints);
            Ok(())
        }
        BiomeFormat::Legacy2dInt(ints) => {
            ensure_simple_2d(data);
            decode_legacy_2d(data, palette, |i| ints[i]);
            Ok(())
        }
        BiomeFormat::Sectioned(sections) => {
            ensure_sparse_quart(data);
            decode_sections(data, palette, sections, y_min, y_max)
        }
        BiomeFormat::Unrecognized => {
            debug!("no recognized biome data in chunk, using unknown fallback");
            // On a fresh palette this registers the unknown biome as id 0; a
            // pre-populated palette (defensive case) gets a dedicated id so
            // queries stay palette-consistent either way.
            let id = palette.put(&UNKNOWN);
            *data = BiomeData::Unknown { id };
            Ok(())
        }
    }
}

fn ensure_simple_2d(data: &mut BiomeData) {
    match data {
        BiomeData::Simple2d(d) => d.clear(),
        other => *other = BiomeData::Simple2d(Simple2d::new()),
    }
}

fn ensure_fixed_quart(data: &mut BiomeData) {
    match data {
        BiomeData::FixedQuart(d) => d.clear(),
        other => *other = BiomeData::FixedQuart(FixedQuart::new()),
    }
}

fn ensure_sparse_quart(data: &mut BiomeData) {
    match data {
        BiomeData::SparseQuart(d) => d.clear(),
        other => *other = BiomeData::SparseQuart(SparseQuart::new()),
    }
}

/// Resolve a pre-flattening numeric id, mapping anything out of the u8 range
/// to the unknown biome.
fn legacy_biome(raw: i32) -> &'static Biome {
    match u8::try_from(raw) {
        Ok(id) => biome_by_legacy_id(id),
        Err(_) => &UNKNOWN,
    }
}

/// One biome per column, y fixed at 0. `raw` yields the stored numeric id for
/// a column index (byte- and int-sourced saves share this layout).
fn decode_legacy_2d(
    data: &mut BiomeData,
    palette: &mut BiomePalette,
    raw: impl Fn(usize) -> i32,
) {
    for z in 0..16i32 {
        for x in 0..16i32 {
            let biome = legacy_biome(raw(((z << 4) | x) as usize));
            let id = palette.put(biome);
            data.set_biome_at(x, 0, z, id);
        }
    }
}

/// 1.15-era quart encoding: 1024 ints covering 4x4 columns by 64 vertical
/// quart layers, indexed `(qy << 4) | (qz << 2) | qx`. Only the y=0 layer is
/// applied, matching how these saves have always been rendered.
// TODO: decode the other 63 vertical layers for true vertical variation.
fn decode_quart_3d_1024(data: &mut BiomeData, palette: &mut BiomePalette, ints: &[i32]) {
    for qz in 0..QUARTS_XZ {
        for qx in 0..QUARTS_XZ {
            let biome = legacy_biome(ints[((qz << 2) | qx) as usize]);
            let id = palette.put(biome);
            fill_quart(data, qx, 0, 0, qz, id);
        }
    }
}

/// Write one id to every block of the quart at quart coordinates
/// (qx, qy, qz), with `base_y` the section's bottom block y.
fn fill_quart(data: &mut BiomeData, qx: i32, base_y: i32, qy: i32, qz: i32, id: u32) {
    for by in 0..4 {
        for bz in 0..4 {
            for bx in 0..4 {
                data.set_biome_at(qx * 4 + bx, base_y + qy * 4 + by, qz * 4 + bz, id);
            }
        }
    }
}

/// Modern per-section decode (21w39a+).
fn decode_sections(
    data: &mut BiomeData,
    palette: &mut BiomePalette,
    sections: &[NbtTag],
    y_min: i32,
    y_max: i32,
) -> Result<(), BiomeLoadError> {
    for section in sections {
        let Some(section) = section.as_compound() else {
            continue;
        };
        let section_y = i32::from(
            section
                .get("Y")
                .and_then(NbtTag::as_byte)
                .unwrap_or_default(),
        );
        let base_y = section_y * 16;
        if base_y > y_max || base_y + 15 < y_min {
            continue;
        }

        let Some(biomes) = section.get("biomes").and_then(NbtTag::as_compound) else {
            continue;
        };
        let Some(keys) = biomes.get("palette").and_then(NbtTag::as_list) else {
            continue;
        };
        if keys.is_empty() {
            continue;
        }

        // Local palette index -> global palette id, computed once per section.
        let local: Vec<u32> = keys
            .iter()
            .map(|key| palette.put(resolve_biome_key(key)))
            .collect();

        let bits = bits_for_palette(local.len());

        match biomes.get("data").and_then(NbtTag::as_long_array) {
            Some(packed) => {
                let mut buffer = BitBuffer::new(packed, bits);
                for qy in 0..QUARTS_XZ {
                    for qz in 0..QUARTS_XZ {
                        for qx in 0..QUARTS_XZ {
                            let index = buffer
                                .read()
                                .ok_or(BiomeLoadError::PackedDataExhausted { section_y })?;
                            let id = match local.get(index as usize) {
                                Some(&id) => id,
                                // Corrupt index; substitute rather than crash.
                                None => palette.put(&UNKNOWN),
                            };
                            fill_quart(data, qx, base_y, qy, qz, id);
                        }
                    }
                }
            }
            None if local.len() == 1 => {
                // Uniform section: one palette entry and no packed data means
                // the whole section is that biome. No bit decoding needed.
                let id = local[0];
                for y in 0..16 {
                    for z in 0..16 {
                        for x in 0..16 {
                            data.set_biome_at(x, base_y + y, z, id);
                        }
                    }
                }
            }
            None => {
                // Seen in the wild as a save-time race: a multi-entry palette
                // with no data array. The section stays at its defaults.
                warn!(
                    section_y,
                    palette_len = local.len(),
                    "biome section has no packed data, skipping"
                );
            }
        }
    }
    Ok(())
}

/// Resolve one entry of a section's palette list, substituting the unknown
/// placeholder for keys this build doesn't know. Future biome names must
/// never abort a chunk decode.
fn resolve_biome_key(key: &NbtTag) -> &'static Biome {
    let Some(key) = key.as_string() else {
        warn!("biome palette entry is not a string, substituting unknown");
        return &UNKNOWN;
    };
    match biome_by_resource_key(key) {
        Some(biome) => biome,
        None => {
            warn!(key, "unrecognized biome, substituting unknown");
            &UNKNOWN
        }
    }
}

/// Bits per packed entry for a local palette of `len` entries.
fn bits_for_palette(len: usize) -> u32 {
    len.next_power_of_two().trailing_zeros().max(1)
}
