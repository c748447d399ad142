/// Damage category. In the ADV era the category follows the move's type
/// (Normal/Fighting/Flying/Poison/Ground/Rock/Bug/Ghost/Steel are physical,
/// the rest special); the table stores it per move so the rule never has to
/// be re-derived.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveData {
    pub name: &'static str,
    pub base_power: u16,
    pub move_type: &'static str,
    pub category: MoveCategory,
    pub hits: u8,
}

const fn attack(
    name: &'static str,
    base_power: u16,
    move_type: &'static str,
    category: MoveCategory,
) -> MoveData {
    MoveData { name, base_power, move_type, category, hits: 1 }
}

const fn status(name: &'static str, move_type: &'static str) -> MoveData {
    MoveData { name, base_power: 0, move_type, category: MoveCategory::Status, hits: 1 }
}

use MoveCategory::{Physical, Special};

pub static MOVES: phf::Map<&'static str, MoveData> = phf::phf_map! {
    // Normal
    "tackle" => attack("Tackle", 35, "Normal", Physical),
    "bodyslam" => attack("Body Slam", 85, "Normal", Physical),
    "return" => attack("Return", 102, "Normal", Physical),
    "doubleedge" => attack("Double-Edge", 120, "Normal", Physical),
    "explosion" => attack("Explosion", 250, "Normal", Physical),
    "sonicboom" => attack("Sonic Boom", 0, "Normal", Physical),
    // Fighting
    "brickbreak" => attack("Brick Break", 75, "Fighting", Physical),
    "crosschop" => attack("Cross Chop", 100, "Fighting", Physical),
    "skyuppercut" => attack("Sky Uppercut", 85, "Fighting", Physical),
    "doublekick" => MoveData {
        name: "Double Kick",
        base_power: 30,
        move_type: "Fighting",
        category: MoveCategory::Physical,
        hits: 2,
    },
    "seismictoss" => attack("Seismic Toss", 0, "Fighting", Physical),
    // Flying
    "aerialace" => attack("Aerial Ace", 60, "Flying", Physical),
    "drillpeck" => attack("Drill Peck", 80, "Flying", Physical),
    // Poison
    "sludgebomb" => attack("Sludge Bomb", 90, "Poison", Physical),
    // Ground
    "earthquake" => attack("Earthquake", 100, "Ground", Physical),
    "bonemerang" => MoveData {
        name: "Bonemerang",
        base_power: 50,
        move_type: "Ground",
        category: MoveCategory::Physical,
        hits: 2,
    },
    // Rock
    "rockslide" => attack("Rock Slide", 75, "Rock", Physical),
    // Bug
    "megahorn" => attack("Megahorn", 120, "Bug", Physical),
    "silverwind" => attack("Silver Wind", 60, "Bug", Physical),
    // Ghost
    "shadowball" => attack("Shadow Ball", 80, "Ghost", Physical),
    "nightshade" => attack("Night Shade", 0, "Ghost", Physical),
    // Steel
    "meteormash" => attack("Meteor Mash", 100, "Steel", Physical),
    // Fire
    "flamethrower" => attack("Flamethrower", 95, "Fire", Special),
    "fireblast" => attack("Fire Blast", 120, "Fire", Special),
    "firepunch" => attack("Fire Punch", 75, "Fire", Special),
    "overheat" => attack("Overheat", 140, "Fire", Special),
    // Water
    "surf" => attack("Surf", 95, "Water", Special),
    "hydropump" => attack("Hydro Pump", 120, "Water", Special),
    // Electric
    "thunderbolt" => attack("Thunderbolt", 95, "Electric", Special),
    "thunder" => attack("Thunder", 120, "Electric", Special),
    // Grass
    "gigadrain" => attack("Giga Drain", 60, "Grass", Special),
    "leafblade" => attack("Leaf Blade", 70, "Grass", Special),
    "solarbeam" => attack("Solar Beam", 120, "Grass", Special),
    // Ice
    "icebeam" => attack("Ice Beam", 95, "Ice", Special),
    "blizzard" => attack("Blizzard", 120, "Ice", Special),
    "icepunch" => attack("Ice Punch", 75, "Ice", Special),
    // Psychic
    "psychic" => attack("Psychic", 90, "Psychic", Special),
    // Dragon
    "dragonclaw" => attack("Dragon Claw", 80, "Dragon", Special),
    "dragonrage" => attack("Dragon Rage", 0, "Dragon", Special),
    // Dark
    "crunch" => attack("Crunch", 80, "Dark", Special),
    // Status
    "dragondance" => status("Dragon Dance", "Dragon"),
    "swordsdance" => status("Swords Dance", "Normal"),
    "bulkup" => status("Bulk Up", "Fighting"),
    "calmmind" => status("Calm Mind", "Psychic"),
    "recover" => status("Recover", "Normal"),
    "softboiled" => status("Soft-Boiled", "Normal"),
    "rest" => status("Rest", "Psychic"),
    "toxic" => status("Toxic", "Poison"),
    "thunderwave" => status("Thunder Wave", "Electric"),
    "willowisp" => status("Will-O-Wisp", "Fire"),
    "protect" => status("Protect", "Normal"),
    "substitute" => status("Substitute", "Normal"),
    "spikes" => status("Spikes", "Ground"),
    "raindance" => status("Rain Dance", "Water"),
    "sunnyday" => status("Sunny Day", "Fire"),
    "hypnosis" => status("Hypnosis", "Psychic"),
};
