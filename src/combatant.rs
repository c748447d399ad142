//! Combatant construction.
//!
//! A [`Combatant`] is a fully derived battle participant; the builder accepts
//! either a raw [`CombatantConfig`] or an already built combatant through the
//! [`CombatantSource`] union, so evaluators can be handed pre-built entities
//! without rebuilding them.

use crate::context::{DataContext, MoveLookup};
use crate::data::moves::MoveCategory;
use crate::data::types::{parse_type, Type};
use crate::model::{CombatantConfig, StatStages};
use crate::stats::{derive_stat, stage_modified, RawStats, Stat, StatSpread};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Burn,
    Paralysis,
    Poison,
    Sleep,
    Freeze,
}

/// Sentinel name for an unfilled move slot.
pub const NO_MOVE: &str = "(No Move)";

/// A normalized move occupying one of the four slots. Unrecognized names keep
/// the supplied name with zero power so evaluation degrades instead of
/// failing.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleMove {
    pub name: String,
    pub base_power: u16,
    pub move_type: Type,
    pub category: MoveCategory,
    pub hits: u8,
}

impl BattleMove {
    /// The empty-slot sentinel.
    pub fn none() -> Self {
        Self {
            name: NO_MOVE.to_string(),
            base_power: 0,
            move_type: Type::Typeless,
            category: MoveCategory::Physical,
            hits: 1,
        }
    }

    pub fn is_empty_slot(&self) -> bool {
        self.name == NO_MOVE
    }
}

/// The ability pair: `base` is what the species entered battle with, `active`
/// is what currently applies (abilities can be suppressed or replaced
/// mid-battle).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AbilitySlot {
    pub base: String,
    pub active: String,
}

impl AbilitySlot {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { base: name.clone(), active: name }
    }
}

#[derive(Clone, Debug)]
pub struct Combatant {
    pub species: String,
    pub level: u8,
    pub item: Option<String>,
    pub ability: AbilitySlot,
    pub nature: String,
    pub ivs: StatSpread,
    pub evs: StatSpread,
    pub raw_stats: RawStats,
    pub boosts: StatStages,
    pub moves: [BattleMove; 4],
    pub types: [Type; 2],
    pub weight_kg: f32,
    pub status: Option<Status>,
    pub current_hp: u16,
    pub max_hp: u16,
}

impl Combatant {
    /// True when the active ability matches (case-insensitive).
    pub fn has_ability(&self, name: &str) -> bool {
        !self.ability.active.is_empty() && self.ability.active.eq_ignore_ascii_case(name)
    }

    pub fn has_type(&self, candidate: Type) -> bool {
        candidate != Type::Typeless && self.types.contains(&candidate)
    }

    /// Restores the active ability to the base one, returning the updated
    /// combatant.
    pub fn with_reset_ability(mut self) -> Self {
        self.ability.active = self.ability.base.clone();
        self
    }

    /// Raw speed adjusted by this combatant's own speed stage.
    pub fn boosted_speed(&self) -> u16 {
        stage_modified(self.raw_stats.spe, self.boosts.spe)
    }
}

/// Either a raw configuration or a combatant that is already built.
#[derive(Clone, Debug)]
pub enum CombatantSource {
    Config(CombatantConfig),
    Built(Combatant),
}

impl From<CombatantConfig> for CombatantSource {
    fn from(config: CombatantConfig) -> Self {
        CombatantSource::Config(config)
    }
}

impl From<Combatant> for CombatantSource {
    fn from(combatant: Combatant) -> Self {
        CombatantSource::Built(combatant)
    }
}

impl From<&Combatant> for CombatantSource {
    fn from(combatant: &Combatant) -> Self {
        CombatantSource::Built(combatant.clone())
    }
}

/// Builds a canonical combatant. Idempotent: an already built combatant
/// passes through unchanged.
pub fn build_combatant(ctx: &DataContext, source: impl Into<CombatantSource>) -> Combatant {
    match source.into() {
        CombatantSource::Built(combatant) => combatant,
        CombatantSource::Config(config) => from_config(ctx, &config),
    }
}

/// Normalizes one move name against the move table.
pub fn normalize_move(ctx: &DataContext, name: &str) -> BattleMove {
    if name.trim().is_empty() {
        return BattleMove::none();
    }
    match ctx.move_data(name) {
        MoveLookup::Known(data) => BattleMove {
            name: data.name.to_string(),
            base_power: data.base_power,
            move_type: parse_type(data.move_type).unwrap_or(Type::Typeless),
            category: data.category,
            hits: data.hits,
        },
        MoveLookup::Unknown => BattleMove {
            name: name.to_string(),
            base_power: 0,
            move_type: Type::Typeless,
            category: MoveCategory::Physical,
            hits: 1,
        },
    }
}

fn from_config(ctx: &DataContext, config: &CombatantConfig) -> Combatant {
    let species_data = ctx.species(&config.species).or_placeholder();
    let level = config.level.unwrap_or(50).clamp(1, 100);
    let nature = config.nature.clone().unwrap_or_else(|| "Hardy".to_string());
    let ivs = config.ivs.resolve(31);
    let evs = config.evs.resolve(0);

    let base = &species_data.base_stats;
    let max_hp = derive_stat(base.hp, ivs.hp, evs.hp, level, true, 1.0);
    let raw_stats = RawStats {
        hp: max_hp,
        atk: derived(ctx, base.atk, &ivs, &evs, level, &nature, Stat::Atk),
        def: derived(ctx, base.def, &ivs, &evs, level, &nature, Stat::Def),
        spa: derived(ctx, base.spa, &ivs, &evs, level, &nature, Stat::Spa),
        spd: derived(ctx, base.spd, &ivs, &evs, level, &nature, Stat::Spd),
        spe: derived(ctx, base.spe, &ivs, &evs, level, &nature, Stat::Spe),
    };

    let mut moves: [BattleMove; 4] = std::array::from_fn(|_| BattleMove::none());
    for (slot, name) in moves.iter_mut().zip(config.moves.iter()) {
        *slot = normalize_move(ctx, name);
    }

    let primary = parse_type(species_data.types[0]).unwrap_or(Type::Typeless);
    let secondary = parse_type(species_data.types[1]).unwrap_or(Type::Typeless);

    Combatant {
        species: config.species.clone(),
        level,
        item: config.item.clone(),
        ability: AbilitySlot::named(config.ability.clone().unwrap_or_default()),
        nature,
        ivs,
        evs,
        raw_stats,
        boosts: config.boosts.clamped(),
        moves,
        types: [primary, secondary],
        weight_kg: config.weight_kg.unwrap_or(species_data.weight_kg),
        status: config.status,
        current_hp: config.current_hp.unwrap_or(max_hp),
        max_hp,
    }
}

fn derived(
    ctx: &DataContext,
    base: u16,
    ivs: &StatSpread,
    evs: &StatSpread,
    level: u8,
    nature: &str,
    stat: Stat,
) -> u16 {
    derive_stat(
        base,
        ivs.get(stat),
        evs.get(stat),
        level,
        false,
        ctx.nature_multiplier(nature, stat),
    )
}
