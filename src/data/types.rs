use serde::Deserialize;

/// Elemental types of the ADV era. `Typeless` covers unknown moves and the
/// empty secondary slot of single-typed species; it is neutral against
/// everything and never grants same-type attack bonus.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Typeless,
}

pub fn parse_type(name: &str) -> Option<Type> {
    match name.to_ascii_lowercase().as_str() {
        "normal" => Some(Type::Normal),
        "fire" => Some(Type::Fire),
        "water" => Some(Type::Water),
        "electric" => Some(Type::Electric),
        "grass" => Some(Type::Grass),
        "ice" => Some(Type::Ice),
        "fighting" => Some(Type::Fighting),
        "poison" => Some(Type::Poison),
        "ground" => Some(Type::Ground),
        "flying" => Some(Type::Flying),
        "psychic" => Some(Type::Psychic),
        "bug" => Some(Type::Bug),
        "rock" => Some(Type::Rock),
        "ghost" => Some(Type::Ghost),
        "dragon" => Some(Type::Dragon),
        "dark" => Some(Type::Dark),
        "steel" => Some(Type::Steel),
        _ => None,
    }
}

/// Gen 3 type chart: attacking type vs. one defending type.
pub fn effectiveness_against(attacking: Type, defending: Type) -> f32 {
    use Type::*;
    if attacking == Typeless || defending == Typeless {
        return 1.0;
    }
    match attacking {
        Normal => match defending {
            Rock | Steel => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Fire => match defending {
            Grass | Ice | Bug | Steel => 2.0,
            Fire | Water | Rock | Dragon => 0.5,
            _ => 1.0,
        },
        Water => match defending {
            Fire | Ground | Rock => 2.0,
            Water | Grass | Dragon => 0.5,
            _ => 1.0,
        },
        Electric => match defending {
            Water | Flying => 2.0,
            Electric | Grass | Dragon => 0.5,
            Ground => 0.0,
            _ => 1.0,
        },
        Grass => match defending {
            Water | Ground | Rock => 2.0,
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 0.5,
            _ => 1.0,
        },
        Ice => match defending {
            Grass | Ground | Flying | Dragon => 2.0,
            Fire | Water | Ice | Steel => 0.5,
            _ => 1.0,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => 2.0,
            Poison | Flying | Psychic | Bug => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Poison => match defending {
            Grass => 2.0,
            Poison | Ground | Rock | Ghost => 0.5,
            Steel => 0.0,
            _ => 1.0,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => 2.0,
            Grass | Bug => 0.5,
            Flying => 0.0,
            _ => 1.0,
        },
        Flying => match defending {
            Grass | Fighting | Bug => 2.0,
            Electric | Rock | Steel => 0.5,
            _ => 1.0,
        },
        Psychic => match defending {
            Fighting | Poison => 2.0,
            Psychic | Steel => 0.5,
            Dark => 0.0,
            _ => 1.0,
        },
        Bug => match defending {
            Grass | Psychic | Dark => 2.0,
            Fire | Fighting | Poison | Flying | Ghost | Steel => 0.5,
            _ => 1.0,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => 2.0,
            Fighting | Ground | Steel => 0.5,
            _ => 1.0,
        },
        Ghost => match defending {
            Psychic | Ghost => 2.0,
            Dark | Steel => 0.5,
            Normal => 0.0,
            _ => 1.0,
        },
        Dragon => match defending {
            Dragon => 2.0,
            Steel => 0.5,
            _ => 1.0,
        },
        Dark => match defending {
            Psychic | Ghost => 2.0,
            Fighting | Dark | Steel => 0.5,
            _ => 1.0,
        },
        Steel => match defending {
            Ice | Rock => 2.0,
            Fire | Water | Electric | Steel => 0.5,
            _ => 1.0,
        },
        Typeless => 1.0,
    }
}

/// Combined effectiveness against a dual-typed defender.
pub fn effectiveness_dual(attacking: Type, primary: Type, secondary: Type) -> f32 {
    effectiveness_against(attacking, primary) * effectiveness_against(attacking, secondary)
}
