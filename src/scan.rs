//! Full-database threat scanning.
//!
//! Every named set in the database is built fresh, evaluated in both
//! directions against the scanned side, scored, and returned sorted from most
//! to least dangerous. A faulted evaluation never aborts the sweep; the entry
//! stays in the ranking carrying its error text and whatever partial numbers
//! survived.

use crate::combatant::{build_combatant, Combatant, CombatantSource};
use crate::context::DataContext;
use crate::engine::DamageEngine;
use crate::field::Field;
use crate::matchup::{Matchup, MatchupEvaluator, MatchupOptions, MoveMatchup};
use crate::model::{CombatantConfig, SetDef};

/// Fallback per-species set allowance when no explicit limit is given;
/// effectively unbounded for any real database.
const DEFAULT_SETS_PER_SPECIES: usize = 1000;

/// Score adjustments: outspeeding a set or holding a guaranteed KO against
/// it makes that set less dangerous to the scanned side.
const OUTSPEED_PENALTY: i32 = -40;
const GUARANTEED_KO_PENALTY: i32 = -200;

#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    pub field: Option<Field>,
    pub field_forward: Option<Field>,
    pub field_reverse: Option<Field>,
    /// Defender level for every built set; defaults to 50.
    pub opponent_level: Option<u8>,
    /// Stop enumerating once this many sets have been evaluated. Applied in
    /// database order, before sorting.
    pub limit: Option<usize>,
}

/// Best move of one direction: the slot with the highest maximum percentage,
/// later slots winning ties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveSummary {
    pub move_name: String,
    pub min_percent: i32,
    pub max_percent: i32,
}

/// One ranked database entry.
#[derive(Clone, Debug)]
pub struct ThreatEntry {
    pub species: String,
    pub set_name: String,
    pub set: SetDef,
    pub forward: Matchup,
    pub reverse: Matchup,
    /// First error encountered across the two directions, forward first.
    pub error: Option<String>,
    pub defender_best: MoveSummary,
    pub attacker_best: MoveSummary,
    pub attacker_guaranteed_ko: bool,
    pub outspeeds: bool,
    /// Higher means this set is harder for the scanned side to face.
    pub score: i32,
}

/// Per-teammate numbers for one database entry in a team scan.
#[derive(Clone, Debug)]
pub struct TeamMemberMatchup {
    pub attacker_best: MoveSummary,
    pub attacker_guaranteed_ko: bool,
    pub defender_best: MoveSummary,
    pub outspeeds: bool,
    pub score: i32,
}

#[derive(Clone, Debug)]
pub struct TeamThreatEntry {
    pub species: String,
    pub set_name: String,
    pub set: SetDef,
    pub members: Vec<TeamMemberMatchup>,
    /// Worst-case (minimum) member score: the set is as dangerous as it is
    /// to the teammate handling it worst.
    pub score: i32,
}

pub struct ThreatScanner<'a> {
    ctx: &'a DataContext,
    engine: &'a dyn DamageEngine,
}

impl<'a> ThreatScanner<'a> {
    pub fn new(ctx: &'a DataContext, engine: &'a dyn DamageEngine) -> Self {
        Self { ctx, engine }
    }

    /// Ranks every set in the database against one attacker, most dangerous
    /// first. Returns an empty ranking when the context carries no database.
    pub fn scan(
        &self,
        attacker: impl Into<CombatantSource>,
        options: &ScanOptions,
    ) -> Vec<ThreatEntry> {
        let attacker = build_combatant(self.ctx, attacker);
        let Some(sets) = self.ctx.sets() else {
            return Vec::new();
        };
        let limit = options
            .limit
            .unwrap_or(sets.species_count() * DEFAULT_SETS_PER_SPECIES);
        let level = options.opponent_level.unwrap_or(50);
        let forward_options = MatchupOptions {
            field: options.field_forward.or(options.field),
            ..MatchupOptions::default()
        };
        let reverse_options = MatchupOptions {
            field: options.field_reverse.or(options.field),
            ..MatchupOptions::default()
        };
        let evaluator = MatchupEvaluator::new(self.ctx, self.engine);

        let mut entries = Vec::new();
        'database: for species_entry in &sets.species {
            for named in &species_entry.sets {
                if entries.len() >= limit {
                    break 'database;
                }
                let mut config = named.def.to_config(&species_entry.species, level);
                infer_ability(self.ctx, &species_entry.species, &mut config);
                let defender = build_combatant(self.ctx, CombatantSource::Config(config));

                let forward = evaluator.evaluate(&attacker, &defender, &forward_options);
                let reverse = evaluator.evaluate(&defender, &attacker, &reverse_options);

                let (defender_best, _) = best_move(&reverse.per_move);
                let (attacker_best, attacker_guaranteed_ko) = best_move(&forward.per_move);
                let outspeeds = match (forward.attacker_speed, forward.defender_speed) {
                    (Some(atk), Some(def)) => atk > def,
                    _ => attacker.raw_stats.spe > defender.raw_stats.spe,
                };
                let score = threat_score(
                    &defender_best,
                    &attacker_best,
                    outspeeds,
                    attacker_guaranteed_ko,
                );
                let error = forward.error.clone().or_else(|| reverse.error.clone());

                entries.push(ThreatEntry {
                    species: species_entry.species.clone(),
                    set_name: named.name.clone(),
                    set: named.def.clone(),
                    forward,
                    reverse,
                    error,
                    defender_best,
                    attacker_best,
                    attacker_guaranteed_ko,
                    outspeeds,
                    score,
                });
            }
        }

        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Ranks every set against a whole party: each teammate is evaluated
    /// independently and the set keeps its worst-case score.
    pub fn scan_team(
        &self,
        team: Vec<CombatantSource>,
        options: &ScanOptions,
    ) -> Vec<TeamThreatEntry> {
        let team: Vec<Combatant> = team
            .into_iter()
            .map(|member| build_combatant(self.ctx, member))
            .collect();
        if team.is_empty() {
            return Vec::new();
        }
        let Some(sets) = self.ctx.sets() else {
            return Vec::new();
        };
        let limit = options
            .limit
            .unwrap_or(sets.species_count() * DEFAULT_SETS_PER_SPECIES);
        let level = options.opponent_level.unwrap_or(50);
        let forward_options = MatchupOptions {
            field: options.field_forward.or(options.field),
            ..MatchupOptions::default()
        };
        let reverse_options = MatchupOptions {
            field: options.field_reverse.or(options.field),
            ..MatchupOptions::default()
        };
        let evaluator = MatchupEvaluator::new(self.ctx, self.engine);

        let mut entries = Vec::new();
        'database: for species_entry in &sets.species {
            for named in &species_entry.sets {
                if entries.len() >= limit {
                    break 'database;
                }
                let mut config = named.def.to_config(&species_entry.species, level);
                infer_ability(self.ctx, &species_entry.species, &mut config);
                let defender = build_combatant(self.ctx, CombatantSource::Config(config));

                let members: Vec<TeamMemberMatchup> = team
                    .iter()
                    .map(|member| {
                        let forward = evaluator.evaluate(member, &defender, &forward_options);
                        let reverse = evaluator.evaluate(&defender, member, &reverse_options);
                        let (attacker_best, attacker_guaranteed_ko) =
                            best_move(&forward.per_move);
                        let (defender_best, _) = best_move(&reverse.per_move);
                        // Speed here stays on raw stats plus the member's own
                        // stage, without consulting the engine.
                        let outspeeds = member.boosted_speed() > defender.boosted_speed();
                        let score = threat_score(
                            &defender_best,
                            &attacker_best,
                            outspeeds,
                            attacker_guaranteed_ko,
                        );
                        TeamMemberMatchup {
                            attacker_best,
                            attacker_guaranteed_ko,
                            defender_best,
                            outspeeds,
                            score,
                        }
                    })
                    .collect();

                let score = members.iter().map(|m| m.score).min().unwrap_or(0);
                entries.push(TeamThreatEntry {
                    species: species_entry.species.clone(),
                    set_name: named.name.clone(),
                    set: named.def.clone(),
                    members,
                    score,
                });
            }
        }

        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }
}

/// Picks the move with the highest maximum percentage. Uses `>=` so a later
/// slot takes a tie, and also reports whether any move guarantees the KO.
fn best_move(per_move: &[MoveMatchup]) -> (MoveSummary, bool) {
    let mut best = MoveSummary::default();
    let mut guaranteed_ko = false;
    for entry in per_move {
        if entry.max_percent >= best.max_percent {
            best = MoveSummary {
                move_name: entry.move_name.clone(),
                min_percent: entry.min_percent,
                max_percent: entry.max_percent,
            };
        }
        if entry.guaranteed_ko {
            guaranteed_ko = true;
        }
    }
    (best, guaranteed_ko)
}

fn threat_score(
    defender_best: &MoveSummary,
    attacker_best: &MoveSummary,
    outspeeds: bool,
    attacker_guaranteed_ko: bool,
) -> i32 {
    defender_best.max_percent - attacker_best.max_percent
        + if outspeeds { OUTSPEED_PENALTY } else { 0 }
        + if attacker_guaranteed_ko { GUARANTEED_KO_PENALTY } else { 0 }
}

/// Fills in the ability for sets that leave it unspecified, when the species
/// has exactly one option. Multi-ability species stay unset.
fn infer_ability(ctx: &DataContext, species: &str, config: &mut CombatantConfig) {
    if config.ability.is_some() {
        return;
    }
    if let Some(data) = ctx.species(species).known() {
        if let [only] = data.abilities {
            config.ability = Some((*only).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_result(name: &str, max_percent: i32) -> MoveMatchup {
        MoveMatchup {
            move_name: name.to_string(),
            min_damage: 0,
            max_damage: 0,
            min_percent: max_percent / 2,
            max_percent,
            guaranteed_ko: false,
            possible_ko: false,
        }
    }

    #[test]
    fn best_move_takes_later_slot_on_ties() {
        let moves = vec![
            move_result("Surf", 40),
            move_result("Ice Beam", 40),
            move_result("Recover", 0),
        ];
        let (best, _) = best_move(&moves);
        assert_eq!(best.move_name, "Ice Beam");
    }

    #[test]
    fn best_move_of_empty_sequence_is_blank() {
        let (best, guaranteed) = best_move(&[]);
        assert_eq!(best, MoveSummary::default());
        assert!(!guaranteed);
    }

    #[test]
    fn score_penalizes_outspeed_and_guaranteed_ko() {
        let defender = MoveSummary { max_percent: 90, ..MoveSummary::default() };
        let attacker = MoveSummary { max_percent: 55, ..MoveSummary::default() };
        assert_eq!(threat_score(&defender, &attacker, false, false), 35);
        assert_eq!(threat_score(&defender, &attacker, true, false), -5);
        assert_eq!(threat_score(&defender, &attacker, true, true), -205);
    }

    #[test]
    fn single_ability_species_is_inferred() {
        let ctx = DataContext::adv();
        let mut config = CombatantConfig::species("Machamp");
        infer_ability(&ctx, "Machamp", &mut config);
        assert_eq!(config.ability.as_deref(), Some("Guts"));
    }

    #[test]
    fn ambiguous_species_stays_unset() {
        let ctx = DataContext::adv();
        let mut config = CombatantConfig::species("Snorlax");
        infer_ability(&ctx, "Snorlax", &mut config);
        assert_eq!(config.ability, None);
    }

    #[test]
    fn explicit_ability_is_untouched() {
        let ctx = DataContext::adv();
        let mut config = CombatantConfig {
            ability: Some("Intimidate".to_string()),
            ..CombatantConfig::species("Machamp")
        };
        infer_ability(&ctx, "Machamp", &mut config);
        assert_eq!(config.ability.as_deref(), Some("Intimidate"));
    }
}
