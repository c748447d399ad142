//! Single-pairing matchup evaluation.
//!
//! One engine call per evaluation; the per-move roll sequences are reduced to
//! min/max damage, percentages of the defender's max HP, and KO flags. Engine
//! faults are captured in [`Matchup::error`] and never propagate: a failed
//! matchup is ordinary data to batch callers.

use crate::combatant::{build_combatant, Combatant, CombatantSource};
use crate::context::DataContext;
use crate::data::normalize_id;
use crate::engine::DamageEngine;
use crate::field::Field;

/// Reduced result for one move slot.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveMatchup {
    pub move_name: String,
    pub min_damage: u32,
    pub max_damage: u32,
    pub min_percent: i32,
    pub max_percent: i32,
    pub guaranteed_ko: bool,
    pub possible_ko: bool,
}

/// Aggregate result of one attacker/defender/field evaluation.
#[derive(Clone, Debug)]
pub struct Matchup {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub per_move: Vec<MoveMatchup>,
    /// The move with the strictly largest minimum percentage; first slot wins
    /// ties.
    pub hardest_move: Option<MoveMatchup>,
    pub attacker_speed: Option<u16>,
    pub defender_speed: Option<u16>,
    /// Set when the damage engine faulted; `per_move` is then empty.
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MatchupOptions {
    /// Restrict the reported results to one named move. The damage
    /// computation still covers all four slots.
    pub move_name: Option<String>,
    pub field: Option<Field>,
}

pub struct MatchupEvaluator<'a> {
    ctx: &'a DataContext,
    engine: &'a dyn DamageEngine,
}

impl<'a> MatchupEvaluator<'a> {
    pub fn new(ctx: &'a DataContext, engine: &'a dyn DamageEngine) -> Self {
        Self { ctx, engine }
    }

    pub fn evaluate(
        &self,
        attacker: impl Into<CombatantSource>,
        defender: impl Into<CombatantSource>,
        options: &MatchupOptions,
    ) -> Matchup {
        let attacker = build_combatant(self.ctx, attacker);
        let defender = build_combatant(self.ctx, defender);
        let field = options.field.unwrap_or_default();

        let raw = match self.engine.compute_moves_damage(&attacker, &defender, &field) {
            Ok(raw) => raw,
            Err(err) => {
                return Matchup {
                    attacker,
                    defender,
                    per_move: Vec::new(),
                    hardest_move: None,
                    attacker_speed: None,
                    defender_speed: None,
                    error: Some(format!("damage engine error: {err}")),
                }
            }
        };

        let mut per_move: Vec<MoveMatchup> = attacker
            .moves
            .iter()
            .zip(raw.iter())
            .map(|(mv, rolls)| {
                let min = rolls.damage.iter().copied().min().unwrap_or(0);
                let max = rolls.damage.iter().copied().max().unwrap_or(0);
                MoveMatchup {
                    move_name: mv.name.clone(),
                    min_damage: min,
                    max_damage: max,
                    min_percent: percent_of_max_hp(min, defender.max_hp),
                    max_percent: percent_of_max_hp(max, defender.max_hp),
                    guaranteed_ko: min >= defender.max_hp as u32,
                    possible_ko: max >= defender.max_hp as u32,
                }
            })
            .collect();

        if let Some(wanted) = &options.move_name {
            let wanted = normalize_id(wanted);
            per_move.retain(|m| normalize_id(&m.move_name) == wanted);
        }

        let mut hardest_move: Option<MoveMatchup> = None;
        for candidate in &per_move {
            match &hardest_move {
                Some(best) if candidate.min_percent <= best.min_percent => {}
                _ => hardest_move = Some(candidate.clone()),
            }
        }

        let side = field.side();
        let attacker_speed = self
            .engine
            .final_speed(&attacker, &side)
            .or(Some(attacker.raw_stats.spe));
        let defender_speed = self
            .engine
            .final_speed(&defender, &side)
            .or(Some(defender.raw_stats.spe));

        Matchup {
            attacker,
            defender,
            per_move,
            hardest_move,
            attacker_speed,
            defender_speed,
            error: None,
        }
    }
}

fn percent_of_max_hp(damage: u32, max_hp: u16) -> i32 {
    (100.0 * damage as f64 / max_hp.max(1) as f64).round() as i32
}
