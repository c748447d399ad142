//! Damage engine capability interface and the shipped Gen 3 implementation.
//!
//! The scanners and the matchup evaluator only depend on the
//! [`DamageEngine`] trait; any damage model can be plugged in. The trait is
//! the crate's fault boundary: an `Err` from `compute_moves_damage` is
//! converted into a soft per-matchup error by the evaluator and never
//! propagates further.

use crate::combatant::{BattleMove, Combatant, Status};
use crate::context::DataContext;
use crate::data::moves::MoveCategory;
use crate::data::normalize_id;
use crate::data::types::Type;
use crate::field::{Field, SideView, Weather};
use crate::stats::stage_modified;
use anyhow::Result;

/// Possible damage rolls for one move slot.
#[derive(Clone, Debug, Default)]
pub struct MoveDamage {
    pub damage: Vec<u32>,
}

impl MoveDamage {
    pub fn flat(value: u32) -> Self {
        Self { damage: vec![value] }
    }
}

pub trait DamageEngine {
    /// Damage rolls for each of the attacker's move slots, in slot order.
    fn compute_moves_damage(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        field: &Field,
    ) -> Result<Vec<MoveDamage>>;

    /// Effective speed after in-battle modifiers, if this engine computes
    /// one. The default engine capability reports nothing; callers fall back
    /// to raw speed.
    fn final_speed(&self, _combatant: &Combatant, _side: &SideView) -> Option<u16> {
        None
    }
}

/// No-op engine: zero damage for every slot, no speed capability. Useful as
/// a stand-in where only scan mechanics are under test.
pub struct NullEngine;

impl DamageEngine for NullEngine {
    fn compute_moves_damage(
        &self,
        attacker: &Combatant,
        _defender: &Combatant,
        _field: &Field,
    ) -> Result<Vec<MoveDamage>> {
        Ok(attacker.moves.iter().map(|_| MoveDamage::flat(0)).collect())
    }
}

/// The ADV-era damage formula with the modifiers that matter for threat
/// scanning: stage boosts, burn, screens, sun/rain, same-type bonus,
/// per-type effectiveness, a handful of ability hooks, fixed-damage moves,
/// multi-hit, and the 16-roll 85-100% spread.
pub struct Gen3Engine<'a> {
    ctx: &'a DataContext,
}

impl<'a> Gen3Engine<'a> {
    pub fn new(ctx: &'a DataContext) -> Self {
        Self { ctx }
    }

    fn move_damage(&self, attacker: &Combatant, defender: &Combatant, side: &SideView, mv: &BattleMove) -> MoveDamage {
        if mv.is_empty_slot() {
            return MoveDamage::flat(0);
        }
        let effectiveness = self.ctx.effectiveness(mv.move_type, defender.types[0])
            * self.ctx.effectiveness(mv.move_type, defender.types[1]);
        if effectiveness == 0.0 || ability_blocks(defender, mv, effectiveness) {
            return MoveDamage::flat(0);
        }
        if let Some(fixed) = fixed_damage(attacker, mv) {
            return MoveDamage::flat(fixed);
        }
        if mv.base_power == 0 || mv.category == MoveCategory::Status {
            return MoveDamage::flat(0);
        }

        let physical = mv.category == MoveCategory::Physical;
        let (mut attack, mut defense) = if physical {
            (
                stage_modified(attacker.raw_stats.atk, attacker.boosts.atk) as u32,
                stage_modified(defender.raw_stats.def, defender.boosts.def) as u32,
            )
        } else {
            (
                stage_modified(attacker.raw_stats.spa, attacker.boosts.spa) as u32,
                stage_modified(defender.raw_stats.spd, defender.boosts.spd) as u32,
            )
        };

        if physical {
            if attacker.has_ability("Huge Power") || attacker.has_ability("Pure Power") {
                attack *= 2;
            }
            if attacker.status.is_some() && attacker.has_ability("Guts") {
                attack = attack * 3 / 2;
            }
            if defender.status.is_some() && defender.has_ability("Marvel Scale") {
                defense = defense * 3 / 2;
            }
        }
        if defender.has_ability("Thick Fat")
            && matches!(mv.move_type, Type::Fire | Type::Ice)
        {
            attack /= 2;
        }
        let attack = attack.max(1);
        let defense = defense.max(1);

        let level = attacker.level as u32;
        let mut damage = (2 * level / 5 + 2) * mv.base_power as u32 * attack / defense / 50;

        // Burn halves physical damage unless the attacker has Guts.
        if physical
            && attacker.status == Some(Status::Burn)
            && !attacker.has_ability("Guts")
        {
            damage /= 2;
        }
        if physical && side.is_reflect {
            damage /= 2;
        }
        if !physical && side.is_light_screen {
            damage /= 2;
        }
        damage = weather_modified(damage, side.weather, mv.move_type);
        damage += 2;

        if attacker.has_type(mv.move_type) {
            damage = damage * 3 / 2;
        }
        damage = apply_effectiveness(damage, self.ctx, mv.move_type, defender.types);
        damage *= mv.hits.max(1) as u32;

        MoveDamage {
            damage: (85..=100u32).map(|roll| (damage * roll / 100).max(1)).collect(),
        }
    }
}

impl DamageEngine for Gen3Engine<'_> {
    fn compute_moves_damage(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        field: &Field,
    ) -> Result<Vec<MoveDamage>> {
        let side = field.side();
        Ok(attacker
            .moves
            .iter()
            .map(|mv| self.move_damage(attacker, defender, &side, mv))
            .collect())
    }

    fn final_speed(&self, combatant: &Combatant, _side: &SideView) -> Option<u16> {
        let mut speed = stage_modified(combatant.raw_stats.spe, combatant.boosts.spe);
        if combatant.status == Some(Status::Paralysis) {
            speed /= 4;
        }
        Some(speed)
    }
}

fn ability_blocks(defender: &Combatant, mv: &BattleMove, effectiveness: f32) -> bool {
    if defender.has_ability("Wonder Guard") && effectiveness <= 1.0 {
        return true;
    }
    if defender.has_ability("Levitate") && mv.move_type == Type::Ground {
        return true;
    }
    false
}

fn fixed_damage(attacker: &Combatant, mv: &BattleMove) -> Option<u32> {
    match normalize_id(&mv.name).as_str() {
        "seismictoss" | "nightshade" => Some(attacker.level as u32),
        "dragonrage" => Some(40),
        "sonicboom" => Some(20),
        _ => None,
    }
}

fn weather_modified(damage: u32, weather: Option<Weather>, move_type: Type) -> u32 {
    match weather {
        Some(Weather::Sun) => match move_type {
            Type::Fire => damage * 3 / 2,
            Type::Water => damage / 2,
            _ => damage,
        },
        Some(Weather::Rain) => match move_type {
            Type::Water => damage * 3 / 2,
            Type::Fire => damage / 2,
            _ => damage,
        },
        _ => damage,
    }
}

/// Effectiveness is applied one defending type at a time, flooring between
/// steps, matching the in-game order of operations.
fn apply_effectiveness(damage: u32, ctx: &DataContext, attacking: Type, defending: [Type; 2]) -> u32 {
    let mut damage = damage;
    for def_type in defending {
        let multiplier = ctx.effectiveness(attacking, def_type);
        if multiplier == 2.0 {
            damage *= 2;
        } else if multiplier == 0.5 {
            damage /= 2;
        } else if multiplier == 0.0 {
            return 0;
        }
    }
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::build_combatant;
    use crate::model::CombatantConfig;

    fn ctx() -> DataContext {
        DataContext::adv()
    }

    fn simple(species: &str, moves: &[&str]) -> CombatantConfig {
        CombatantConfig {
            moves: moves.iter().map(|m| m.to_string()).collect(),
            ..CombatantConfig::species(species)
        }
    }

    #[test]
    fn sixteen_rolls_in_ascending_order() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(&ctx, simple("Machamp", &["Cross Chop"]));
        let defender = build_combatant(&ctx, simple("Snorlax", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls.len(), 4);
        let damage = &rolls[0].damage;
        assert_eq!(damage.len(), 16);
        assert!(damage.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(damage[0] > 0);
    }

    #[test]
    fn empty_slots_deal_no_damage() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(&ctx, simple("Machamp", &["Cross Chop"]));
        let defender = build_combatant(&ctx, simple("Snorlax", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls[1].damage, vec![0]);
        assert_eq!(rolls[3].damage, vec![0]);
    }

    #[test]
    fn ground_immunity_zeroes_earthquake() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(&ctx, simple("Swampert", &["Earthquake"]));
        let defender = build_combatant(&ctx, simple("Charizard", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls[0].damage, vec![0]);
    }

    #[test]
    fn levitate_blocks_ground_moves() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(&ctx, simple("Swampert", &["Earthquake"]));
        let defender = build_combatant(
            &ctx,
            CombatantConfig {
                ability: Some("Levitate".to_string()),
                ..CombatantConfig::species("Gengar")
            },
        );
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls[0].damage, vec![0]);
    }

    #[test]
    fn wonder_guard_only_admits_super_effective_hits() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let shedinja = build_combatant(
            &ctx,
            CombatantConfig {
                ability: Some("Wonder Guard".to_string()),
                ..CombatantConfig::species("Shedinja")
            },
        );
        // A neutral hit is walled; a super effective Fire move lands.
        let neutral = build_combatant(&ctx, simple("Starmie", &["Surf"]));
        let rolls = engine
            .compute_moves_damage(&neutral, &shedinja, &Field::default())
            .unwrap();
        assert_eq!(rolls[0].damage, vec![0]);

        let fire = build_combatant(&ctx, simple("Charizard", &["Flamethrower"]));
        let rolls = engine
            .compute_moves_damage(&fire, &shedinja, &Field::default())
            .unwrap();
        assert!(rolls[0].damage.iter().all(|&d| d > 0));
    }

    #[test]
    fn seismic_toss_deals_level_damage() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(
            &ctx,
            CombatantConfig {
                level: Some(63),
                ..simple("Blissey", &["Seismic Toss"])
            },
        );
        let defender = build_combatant(&ctx, simple("Snorlax", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls[0].damage, vec![63]);
    }

    #[test]
    fn seismic_toss_cannot_touch_ghosts() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let attacker = build_combatant(&ctx, simple("Blissey", &["Seismic Toss"]));
        let defender = build_combatant(&ctx, simple("Gengar", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert_eq!(rolls[0].damage, vec![0]);
    }

    #[test]
    fn double_kick_hits_twice() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        // Double Kick is 2x30 power; Tackle is a single 35. The doubled hit
        // count has to win.
        let attacker = build_combatant(&ctx, simple("Machamp", &["Double Kick", "Tackle"]));
        let defender = build_combatant(&ctx, simple("Snorlax", &[]));
        let rolls = engine
            .compute_moves_damage(&attacker, &defender, &Field::default())
            .unwrap();
        assert!(rolls[0].damage[15] > rolls[1].damage[15]);
    }

    #[test]
    fn stat_stages_raise_output() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let flat = build_combatant(&ctx, simple("Salamence", &["Earthquake"]));
        let boosted = build_combatant(
            &ctx,
            CombatantConfig {
                boosts: crate::model::StatStages { atk: 2, ..Default::default() },
                ..simple("Salamence", &["Earthquake"])
            },
        );
        let defender = build_combatant(&ctx, simple("Metagross", &[]));
        let base = engine
            .compute_moves_damage(&flat, &defender, &Field::default())
            .unwrap()[0]
            .damage[15];
        let raised = engine
            .compute_moves_damage(&boosted, &defender, &Field::default())
            .unwrap()[0]
            .damage[15];
        assert!(raised > base);
    }

    #[test]
    fn paralysis_quarters_final_speed() {
        let ctx = ctx();
        let engine = Gen3Engine::new(&ctx);
        let healthy = build_combatant(&ctx, simple("Starmie", &[]));
        let paralyzed = build_combatant(
            &ctx,
            CombatantConfig {
                status: Some(Status::Paralysis),
                ..CombatantConfig::species("Starmie")
            },
        );
        let side = Field::default().side();
        let fast = engine.final_speed(&healthy, &side).unwrap();
        let slow = engine.final_speed(&paralyzed, &side).unwrap();
        assert_eq!(slow, fast / 4);
    }
}
