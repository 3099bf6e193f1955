//! Biome identities and the static biome registry.
//!
//! Biomes are identified by their resource key ("minecraft:plains"). Saves
//! written before the flattening use small numeric ids instead; those map
//! through the head of the registry table, whose order matches the legacy id
//! assignment. Colors feed the map/shading consumers, decode itself only
//! cares about identity.

/// Definition of a single biome.
#[derive(Debug, PartialEq)]
pub struct Biome {
    /// Resource key, e.g. "minecraft:plains".
    pub resource_key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Base temperature, drives grass/foliage tinting.
    pub temperature: f64,
    /// Rainfall, drives grass/foliage tinting.
    pub rain: f64,
    /// Color used on the 2D map view (0xRRGGBB).
    pub map_color: u32,
    /// Fallback grass color computed from the default resource pack.
    pub grass_color: u32,
    /// Fallback foliage color computed from the default resource pack.
    pub foliage_color: u32,
    /// Water tint (0xRRGGBB).
    pub water_color: u32,
}

const DEFAULT_WATER: u32 = 0x3F76E4;

const fn biome(
    resource_key: &'static str,
    name: &'static str,
    temperature: f64,
    rain: f64,
    map_color: u32,
    grass_color: u32,
    foliage_color: u32,
) -> Biome {
    Biome {
        resource_key,
        name,
        temperature,
        rain,
        map_color,
        grass_color,
        foliage_color,
        water_color: DEFAULT_WATER,
    }
}

const fn water(mut b: Biome, water_color: u32) -> Biome {
    b.water_color = water_color;
    b
}

/// Placeholder substituted for unrecognized resource keys and out-of-range
/// legacy ids. Decoding must never fail on a biome added by a future game
/// version.
pub static UNKNOWN: Biome = biome(
    "chunkview:unknown",
    "Unknown",
    0.5,
    0.5,
    0x7E7E7E,
    0x8EB971,
    0x71A74D,
);

/// Number of leading entries in [`BIOMES`] whose index equals their legacy
/// numeric id.
const LEGACY_BIOME_COUNT: usize = 40;

/// All known biome definitions. The first [`LEGACY_BIOME_COUNT`] entries are
/// ordered by legacy id; the rest only exist post-flattening.
#[rustfmt::skip]
static BIOMES: &[Biome] = &[
    biome("minecraft:ocean", "Ocean", 0.5, 0.5, 0x000070, 0x8EB971, 0x71A74D),
    biome("minecraft:plains", "Plains", 0.8, 0.4, 0x8DB360, 0x91BD59, 0x77AB2F),
    biome("minecraft:desert", "Desert", 2.0, 0.0, 0xFA9418, 0xBFB755, 0xAEA42A),
    biome("minecraft:mountains", "Mountains", 0.2, 0.3, 0x606060, 0x8AB689, 0x6DA36B),
    biome("minecraft:forest", "Forest", 0.7, 0.8, 0x056621, 0x79C05A, 0x59AE30),
    biome("minecraft:taiga", "Taiga", 0.25, 0.8, 0x0B6659, 0x86B783, 0x68A464),
    water(biome("minecraft:swamp", "Swamp", 0.8, 0.9, 0x07F9B2, 0x6A7039, 0x6A7039), 0x617B64),
    biome("minecraft:river", "River", 0.5, 0.5, 0x0000FF, 0x8EB971, 0x71A74D),
    biome("minecraft:nether_wastes", "Nether Wastes", 2.0, 0.0, 0xBF3B3B, 0xBFB755, 0xAEA42A),
    biome("minecraft:the_end", "The End", 0.5, 0.5, 0x8080FF, 0x8EB971, 0x71A74D),
    water(biome("minecraft:frozen_ocean", "Frozen Ocean", 0.0, 0.5, 0x7070D6, 0x80B497, 0x60A17B), 0x3938C9),
    water(biome("minecraft:frozen_river", "Frozen River", 0.0, 0.5, 0xA0A0FF, 0x80B497, 0x60A17B), 0x3938C9),
    biome("minecraft:snowy_tundra", "Snowy Tundra", 0.0, 0.5, 0xFFFFFF, 0x80B497, 0x60A17B),
    biome("minecraft:snowy_mountains", "Snowy Mountains", 0.0, 0.5, 0xA0A0A0, 0x80B497, 0x60A17B),
    biome("minecraft:mushroom_fields", "Mushroom Fields", 0.9, 1.0, 0xFF00FF, 0x55C93F, 0x2BBB0F),
    biome("minecraft:mushroom_field_shore", "Mushroom Field Shore", 0.9, 1.0, 0xA000FF, 0x55C93F, 0x2BBB0F),
    biome("minecraft:beach", "Beach", 0.8, 0.4, 0xFADE55, 0x91BD59, 0x77AB2F),
    biome("minecraft:desert_hills", "Desert Hills", 2.0, 0.0, 0xD25F12, 0xBFB755, 0xAEA42A),
    biome("minecraft:wooded_hills", "Wooded Hills", 0.7, 0.8, 0x22551C, 0x79C05A, 0x59AE30),
    biome("minecraft:taiga_hills", "Taiga Hills", 0.25, 0.8, 0x163933, 0x86B783, 0x68A464),
    biome("minecraft:mountain_edge", "Mountain Edge", 0.2, 0.3, 0x72789A, 0x8AB689, 0x6DA36B),
    biome("minecraft:jungle", "Jungle", 0.95, 0.9, 0x537B09, 0x59C93C, 0x30BB0B),
    biome("minecraft:jungle_hills", "Jungle Hills", 0.95, 0.9, 0x2C4205, 0x59C93C, 0x30BB0B),
    biome("minecraft:jungle_edge", "Jungle Edge", 0.95, 0.8, 0x628B17, 0x64C73F, 0x3EB80F),
    biome("minecraft:deep_ocean", "Deep Ocean", 0.5, 0.5, 0x000030, 0x8EB971, 0x71A74D),
    biome("minecraft:stone_shore", "Stone Shore", 0.2, 0.3, 0xA2A284, 0x8AB689, 0x6DA36B),
    biome("minecraft:snowy_beach", "Snowy Beach", 0.05, 0.3, 0xFAF0C0, 0x83B593, 0x64A278),
    biome("minecraft:birch_forest", "Birch Forest", 0.6, 0.6, 0x307444, 0x88BB67, 0x6BA941),
    biome("minecraft:birch_forest_hills", "Birch Forest Hills", 0.6, 0.6, 0x1F5F32, 0x88BB67, 0x6BA941),
    biome("minecraft:dark_forest", "Dark Forest", 0.7, 0.8, 0x40511A, 0x26C05A, 0x59AE30),
    biome("minecraft:snowy_taiga", "Snowy Taiga", -0.5, 0.4, 0x31554A, 0x80B497, 0x60A17B),
    biome("minecraft:snowy_taiga_hills", "Snowy Taiga Hills", -0.5, 0.4, 0x243F36, 0x80B497, 0x60A17B),
    biome("minecraft:giant_tree_taiga", "Giant Tree Taiga", 0.3, 0.8, 0x596651, 0x86B87F, 0x68A55F),
    biome("minecraft:giant_tree_taiga_hills", "Giant Tree Taiga Hills", 0.3, 0.8, 0x454F3E, 0x86B87F, 0x68A55F),
    biome("minecraft:wooded_mountains", "Wooded Mountains", 0.2, 0.3, 0x507050, 0x8AB689, 0x6DA36B),
    biome("minecraft:savanna", "Savanna", 1.2, 0.0, 0xBDB25F, 0xBFB755, 0xAEA42A),
    biome("minecraft:savanna_plateau", "Savanna Plateau", 1.0, 0.0, 0xA79D64, 0xBFB755, 0xAEA42A),
    biome("minecraft:badlands", "Badlands", 2.0, 0.0, 0xD94515, 0x90814D, 0x9E814D),
    biome("minecraft:wooded_badlands_plateau", "Wooded Badlands Plateau", 2.0, 0.0, 0xB09765, 0x90814D, 0x9E814D),
    biome("minecraft:badlands_plateau", "Badlands Plateau", 2.0, 0.0, 0xCA8C65, 0x90814D, 0x9E814D),
    // Post-flattening biomes, no legacy id.
    biome("minecraft:snowy_plains", "Snowy Plains", 0.0, 0.5, 0xFFFFFF, 0x80B497, 0x60A17B),
    biome("minecraft:windswept_hills", "Windswept Hills", 0.2, 0.3, 0x606060, 0x8AB689, 0x6DA36B),
    biome("minecraft:windswept_forest", "Windswept Forest", 0.2, 0.3, 0x507050, 0x8AB689, 0x6DA36B),
    biome("minecraft:windswept_gravelly_hills", "Windswept Gravelly Hills", 0.2, 0.3, 0x789878, 0x8AB689, 0x6DA36B),
    biome("minecraft:stony_shore", "Stony Shore", 0.2, 0.3, 0xA2A284, 0x8AB689, 0x6DA36B),
    biome("minecraft:old_growth_birch_forest", "Old Growth Birch Forest", 0.6, 0.6, 0x589C6C, 0x88BB67, 0x6BA941),
    biome("minecraft:old_growth_pine_taiga", "Old Growth Pine Taiga", 0.3, 0.8, 0x596651, 0x86B87F, 0x68A55F),
    biome("minecraft:old_growth_spruce_taiga", "Old Growth Spruce Taiga", 0.25, 0.8, 0x818E79, 0x86B783, 0x68A464),
    biome("minecraft:sparse_jungle", "Sparse Jungle", 0.95, 0.8, 0x628B17, 0x64C73F, 0x3EB80F),
    biome("minecraft:bamboo_jungle", "Bamboo Jungle", 0.95, 0.9, 0x768E14, 0x59C93C, 0x30BB0B),
    biome("minecraft:meadow", "Meadow", 0.5, 0.8, 0x2C8340, 0x83BB6D, 0x63A948),
    biome("minecraft:grove", "Grove", -0.2, 0.8, 0x888888, 0x80B497, 0x60A17B),
    biome("minecraft:snowy_slopes", "Snowy Slopes", -0.3, 0.9, 0xA0A0A0, 0x80B497, 0x60A17B),
    biome("minecraft:jagged_peaks", "Jagged Peaks", -0.7, 0.9, 0xDCDCC8, 0x80B497, 0x60A17B),
    biome("minecraft:frozen_peaks", "Frozen Peaks", -0.7, 0.9, 0xB0B3CE, 0x80B497, 0x60A17B),
    biome("minecraft:stony_peaks", "Stony Peaks", 1.0, 0.3, 0x7B8F74, 0x9ABE4B, 0x82AC1E),
    biome("minecraft:lush_caves", "Lush Caves", 0.5, 0.5, 0x7BA331, 0x91BD59, 0x77AB2F),
    biome("minecraft:dripstone_caves", "Dripstone Caves", 0.8, 0.4, 0x7B6254, 0x91BD59, 0x77AB2F),
    biome("minecraft:deep_dark", "Deep Dark", 0.8, 0.4, 0x031F29, 0x8AB689, 0x6DA36B),
    water(biome("minecraft:mangrove_swamp", "Mangrove Swamp", 0.8, 0.9, 0x2CCC8E, 0x6A7039, 0x8DB127), 0x3A7A6A),
    biome("minecraft:cherry_grove", "Cherry Grove", 0.5, 0.8, 0xE2A8C9, 0xB6DB61, 0xB6DB61),
    water(biome("minecraft:warm_ocean", "Warm Ocean", 0.5, 0.5, 0x0000AC, 0x8EB971, 0x71A74D), 0x43D5EE),
    water(biome("minecraft:lukewarm_ocean", "Lukewarm Ocean", 0.5, 0.5, 0x000090, 0x8EB971, 0x71A74D), 0x45ADF2),
    water(biome("minecraft:cold_ocean", "Cold Ocean", 0.5, 0.5, 0x202070, 0x8EB971, 0x71A74D), 0x3D57D6),
];

/// Look up a biome by resource key.
pub fn biome_by_resource_key(key: &str) -> Option<&'static Biome> {
    BIOMES.iter().find(|b| b.resource_key == key)
}

/// Look up a biome by its pre-flattening numeric id. Out-of-range ids answer
/// [`UNKNOWN`].
pub fn biome_by_legacy_id(id: u8) -> &'static Biome {
    let idx = id as usize;
    if idx < LEGACY_BIOME_COUNT {
        &BIOMES[idx]
    } else {
        &UNKNOWN
    }
}

/// Get the static biome definitions table.
pub fn biomes() -> &'static [Biome] {
    BIOMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_ids_match_pre_flattening_order() {
        assert_eq!(biome_by_legacy_id(0).resource_key, "minecraft:ocean");
        assert_eq!(biome_by_legacy_id(1).resource_key, "minecraft:plains");
        assert_eq!(biome_by_legacy_id(2).resource_key, "minecraft:desert");
        assert_eq!(biome_by_legacy_id(7).resource_key, "minecraft:river");
        assert_eq!(biome_by_legacy_id(21).resource_key, "minecraft:jungle");
        assert_eq!(biome_by_legacy_id(35).resource_key, "minecraft:savanna");
        assert_eq!(biome_by_legacy_id(37).resource_key, "minecraft:badlands");
    }

    #[test]
    fn out_of_range_legacy_id_is_unknown() {
        assert_eq!(*biome_by_legacy_id(40), UNKNOWN);
        assert_eq!(*biome_by_legacy_id(255), UNKNOWN);
    }

    #[test]
    fn resource_key_lookup() {
        let plains = biome_by_resource_key("minecraft:plains").unwrap();
        assert_eq!(plains.name, "Plains");
        assert!(biome_by_resource_key("minecraft:upside_down_land").is_none());
    }

    #[test]
    fn modern_biomes_have_no_legacy_id() {
        // snowy_plains sits past the legacy range; a legacy id must never
        // resolve to it.
        let idx = BIOMES
            .iter()
            .position(|b| b.resource_key == "minecraft:snowy_plains")
            .unwrap();
        assert!(idx >= LEGACY_BIOME_COUNT);
    }

    #[test]
    fn resource_keys_are_unique() {
        for (i, a) in BIOMES.iter().enumerate() {
            for b in &BIOMES[i + 1..] {
                assert_ne!(a.resource_key, b.resource_key);
            }
        }
    }
}
