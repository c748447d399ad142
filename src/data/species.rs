#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

/// One pokedex row. Single-typed species carry an empty secondary type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesData {
    pub name: &'static str,
    pub base_stats: BaseStats,
    pub types: [&'static str; 2],
    pub weight_kg: f32,
    pub abilities: &'static [&'static str],
}

/// Placeholder returned for species missing from the pokedex. Base stats of 1
/// degrade damage output to near zero instead of failing the build.
pub static UNKNOWN_SPECIES: SpeciesData = SpeciesData {
    name: "",
    base_stats: BaseStats { hp: 1, atk: 1, def: 1, spa: 1, spd: 1, spe: 1 },
    types: ["", ""],
    weight_kg: 1.0,
    abilities: &[],
};

const fn stats(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> BaseStats {
    BaseStats { hp, atk, def, spa, spd, spe }
}

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf::phf_map! {
    "charizard" => SpeciesData {
        name: "Charizard",
        base_stats: stats(78, 84, 78, 109, 85, 100),
        types: ["Fire", "Flying"],
        weight_kg: 90.5,
        abilities: &["Blaze"],
    },
    "blaziken" => SpeciesData {
        name: "Blaziken",
        base_stats: stats(80, 120, 70, 110, 70, 80),
        types: ["Fire", "Fighting"],
        weight_kg: 52.0,
        abilities: &["Blaze"],
    },
    "swampert" => SpeciesData {
        name: "Swampert",
        base_stats: stats(100, 110, 90, 85, 90, 60),
        types: ["Water", "Ground"],
        weight_kg: 81.9,
        abilities: &["Torrent"],
    },
    "sceptile" => SpeciesData {
        name: "Sceptile",
        base_stats: stats(70, 85, 65, 105, 85, 120),
        types: ["Grass", ""],
        weight_kg: 52.2,
        abilities: &["Overgrow"],
    },
    "salamence" => SpeciesData {
        name: "Salamence",
        base_stats: stats(95, 135, 80, 110, 80, 100),
        types: ["Dragon", "Flying"],
        weight_kg: 102.6,
        abilities: &["Intimidate"],
    },
    "metagross" => SpeciesData {
        name: "Metagross",
        base_stats: stats(80, 135, 130, 95, 90, 70),
        types: ["Steel", "Psychic"],
        weight_kg: 550.0,
        abilities: &["Clear Body"],
    },
    "tyranitar" => SpeciesData {
        name: "Tyranitar",
        base_stats: stats(100, 134, 110, 95, 100, 61),
        types: ["Rock", "Dark"],
        weight_kg: 202.0,
        abilities: &["Sand Stream"],
    },
    "snorlax" => SpeciesData {
        name: "Snorlax",
        base_stats: stats(160, 110, 65, 65, 110, 30),
        types: ["Normal", ""],
        weight_kg: 460.0,
        abilities: &["Immunity", "Thick Fat"],
    },
    "gengar" => SpeciesData {
        name: "Gengar",
        base_stats: stats(60, 65, 60, 130, 75, 110),
        types: ["Ghost", "Poison"],
        weight_kg: 40.5,
        abilities: &["Levitate"],
    },
    "alakazam" => SpeciesData {
        name: "Alakazam",
        base_stats: stats(55, 50, 45, 135, 95, 120),
        types: ["Psychic", ""],
        weight_kg: 48.0,
        abilities: &["Synchronize", "Inner Focus"],
    },
    "starmie" => SpeciesData {
        name: "Starmie",
        base_stats: stats(60, 75, 85, 100, 85, 115),
        types: ["Water", "Psychic"],
        weight_kg: 80.0,
        abilities: &["Illuminate", "Natural Cure"],
    },
    "skarmory" => SpeciesData {
        name: "Skarmory",
        base_stats: stats(65, 80, 140, 40, 70, 70),
        types: ["Steel", "Flying"],
        weight_kg: 50.5,
        abilities: &["Keen Eye", "Sturdy"],
    },
    "blissey" => SpeciesData {
        name: "Blissey",
        base_stats: stats(255, 10, 10, 75, 135, 55),
        types: ["Normal", ""],
        weight_kg: 46.8,
        abilities: &["Natural Cure", "Serene Grace"],
    },
    "machamp" => SpeciesData {
        name: "Machamp",
        base_stats: stats(90, 130, 80, 65, 85, 55),
        types: ["Fighting", ""],
        weight_kg: 130.0,
        abilities: &["Guts"],
    },
    "heracross" => SpeciesData {
        name: "Heracross",
        base_stats: stats(80, 125, 75, 40, 95, 85),
        types: ["Bug", "Fighting"],
        weight_kg: 54.0,
        abilities: &["Swarm", "Guts"],
    },
    "milotic" => SpeciesData {
        name: "Milotic",
        base_stats: stats(95, 60, 79, 100, 125, 81),
        types: ["Water", ""],
        weight_kg: 162.0,
        abilities: &["Marvel Scale"],
    },
    "gyarados" => SpeciesData {
        name: "Gyarados",
        base_stats: stats(95, 125, 79, 60, 100, 81),
        types: ["Water", "Flying"],
        weight_kg: 235.0,
        abilities: &["Intimidate"],
    },
    "aerodactyl" => SpeciesData {
        name: "Aerodactyl",
        base_stats: stats(80, 105, 65, 60, 75, 130),
        types: ["Rock", "Flying"],
        weight_kg: 59.0,
        abilities: &["Rock Head", "Pressure"],
    },
    "latios" => SpeciesData {
        name: "Latios",
        base_stats: stats(80, 90, 80, 130, 110, 110),
        types: ["Dragon", "Psychic"],
        weight_kg: 60.0,
        abilities: &["Levitate"],
    },
    "suicune" => SpeciesData {
        name: "Suicune",
        base_stats: stats(100, 75, 115, 90, 115, 85),
        types: ["Water", ""],
        weight_kg: 187.0,
        abilities: &["Pressure"],
    },
    "dragonite" => SpeciesData {
        name: "Dragonite",
        base_stats: stats(91, 134, 95, 100, 100, 80),
        types: ["Dragon", "Flying"],
        weight_kg: 210.0,
        abilities: &["Inner Focus"],
    },
    "shedinja" => SpeciesData {
        name: "Shedinja",
        base_stats: stats(1, 90, 45, 30, 30, 40),
        types: ["Bug", "Ghost"],
        weight_kg: 1.2,
        abilities: &["Wonder Guard"],
    },
    "pikachu" => SpeciesData {
        name: "Pikachu",
        base_stats: stats(35, 55, 40, 50, 50, 90),
        types: ["Electric", ""],
        weight_kg: 6.0,
        abilities: &["Static"],
    },
    "dusclops" => SpeciesData {
        name: "Dusclops",
        base_stats: stats(40, 70, 130, 60, 130, 25),
        types: ["Ghost", ""],
        weight_kg: 30.6,
        abilities: &["Pressure"],
    },
    "quagsire" => SpeciesData {
        name: "Quagsire",
        base_stats: stats(95, 85, 85, 65, 65, 35),
        types: ["Water", "Ground"],
        weight_kg: 75.0,
        abilities: &["Damp", "Water Absorb"],
    },
};
