use super::moves::{MoveCategory, MOVES};
use super::natures::NATURES;
use super::normalize_id;
use super::sets::builtin_sets;
use super::species::POKEDEX;
use super::types::{effectiveness_against, effectiveness_dual, parse_type, Type};
use crate::stats::Stat;

#[test]
fn normalize_strips_case_and_punctuation() {
    assert_eq!(normalize_id("Soft-Boiled"), "softboiled");
    assert_eq!(normalize_id("Will-O-Wisp"), "willowisp");
    assert_eq!(normalize_id("CHARIZARD"), "charizard");
}

#[test]
fn charizard_entry() {
    let charizard = POKEDEX.get("charizard").expect("Charizard is in the pokedex");
    assert_eq!(charizard.base_stats.hp, 78);
    assert_eq!(charizard.base_stats.atk, 84);
    assert_eq!(charizard.types[0], "Fire");
    assert_eq!(charizard.types[1], "Flying");
    assert_eq!(charizard.abilities, &["Blaze"]);
}

#[test]
fn single_typed_species_leave_second_slot_empty() {
    let machamp = POKEDEX.get("machamp").expect("Machamp is in the pokedex");
    assert_eq!(machamp.types[1], "");
    assert_eq!(parse_type(machamp.types[1]), None);
}

#[test]
fn adv_move_values() {
    let flamethrower = MOVES.get("flamethrower").expect("Flamethrower is present");
    assert_eq!(flamethrower.base_power, 95);
    assert_eq!(flamethrower.category, MoveCategory::Special);
    // Shadow Ball rides the Ghost type's physical category in this era.
    let shadow_ball = MOVES.get("shadowball").expect("Shadow Ball is present");
    assert_eq!(shadow_ball.category, MoveCategory::Physical);
    let double_kick = MOVES.get("doublekick").expect("Double Kick is present");
    assert_eq!(double_kick.hits, 2);
}

#[test]
fn nature_table_covers_all_twenty_five() {
    assert_eq!(NATURES.len(), 25);
    let adamant = NATURES.get("adamant").expect("Adamant exists");
    assert_eq!(adamant.plus, Some(Stat::Atk));
    assert_eq!(adamant.minus, Some(Stat::Spa));
    let hardy = NATURES.get("hardy").expect("Hardy exists");
    assert_eq!(hardy.plus, None);
    assert_eq!(hardy.minus, None);
}

#[test]
fn chart_spot_checks() {
    assert_eq!(effectiveness_against(Type::Ice, Type::Dragon), 2.0);
    assert_eq!(effectiveness_against(Type::Electric, Type::Ground), 0.0);
    assert_eq!(effectiveness_against(Type::Fighting, Type::Ghost), 0.0);
    assert_eq!(effectiveness_against(Type::Ghost, Type::Psychic), 2.0);
    assert_eq!(effectiveness_dual(Type::Ice, Type::Dragon, Type::Flying), 4.0);
    assert_eq!(effectiveness_dual(Type::Rock, Type::Bug, Type::Ghost), 2.0);
    assert_eq!(effectiveness_against(Type::Typeless, Type::Steel), 1.0);
}

#[test]
fn builtin_sets_reference_known_data() {
    let sets = builtin_sets();
    assert!(sets.set_count() >= 20);
    for (species, named) in sets.iter() {
        assert!(
            POKEDEX.get(normalize_id(species).as_str()).is_some(),
            "unknown species {species} in built-in sets"
        );
        assert!(!named.def.moves.is_empty(), "{species} {} has no moves", named.name);
        assert!(named.def.moves.len() <= 4);
        for mv in &named.def.moves {
            assert!(
                MOVES.get(normalize_id(mv).as_str()).is_some(),
                "unknown move {mv} in built-in sets"
            );
        }
    }
}
