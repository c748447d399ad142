//! Serde models for externally supplied configuration: combatant configs,
//! set definitions, and the set database. Every field defaults, and unknown
//! keys are ignored, so partial inputs never fail to parse.

use crate::combatant::Status;
use crate::stats::{Stat, StatSpread};
use anyhow::Context;
use serde::Deserialize;

/// A partially specified IV or EV spread; unspecified stats take the
/// caller-side default (31 for IVs, 0 for EVs).
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PartialSpread {
    #[serde(default)]
    pub hp: Option<u8>,
    #[serde(default)]
    pub atk: Option<u8>,
    #[serde(default)]
    pub def: Option<u8>,
    #[serde(default)]
    pub spa: Option<u8>,
    #[serde(default)]
    pub spd: Option<u8>,
    #[serde(default)]
    pub spe: Option<u8>,
}

impl PartialSpread {
    pub fn resolve(&self, fallback: u8) -> StatSpread {
        StatSpread {
            hp: self.hp.unwrap_or(fallback),
            atk: self.atk.unwrap_or(fallback),
            def: self.def.unwrap_or(fallback),
            spa: self.spa.unwrap_or(fallback),
            spd: self.spd.unwrap_or(fallback),
            spe: self.spe.unwrap_or(fallback),
        }
    }
}

/// Active stat stage boosts. HP has no stage.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct StatStages {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
}

impl StatStages {
    pub fn clamped(self) -> Self {
        Self {
            atk: self.atk.clamp(-6, 6),
            def: self.def.clamp(-6, 6),
            spa: self.spa.clamp(-6, 6),
            spd: self.spd.clamp(-6, 6),
            spe: self.spe.clamp(-6, 6),
        }
    }

    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

/// Raw combatant configuration. Everything except the species is optional;
/// the builder fills in level 50, a neutral nature, perfect IVs, empty EVs,
/// and full HP.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CombatantConfig {
    pub species: String,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub evs: PartialSpread,
    #[serde(default)]
    pub ivs: PartialSpread,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub boosts: StatStages,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub current_hp: Option<u16>,
    #[serde(default)]
    pub weight_kg: Option<f32>,
}

impl CombatantConfig {
    pub fn species(name: impl Into<String>) -> Self {
        Self { species: name.into(), ..Self::default() }
    }
}

/// A named, fixed build drawn from the set database.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SetDef {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub evs: PartialSpread,
    #[serde(default)]
    pub ivs: PartialSpread,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub boosts: StatStages,
    #[serde(default)]
    pub tier: Option<String>,
}

impl SetDef {
    /// Copies the set into a fresh combatant config for the given species
    /// and level. The set itself is never mutated.
    pub fn to_config(&self, species: &str, level: u8) -> CombatantConfig {
        CombatantConfig {
            species: species.to_string(),
            level: Some(level),
            item: self.item.clone(),
            ability: self.ability.clone(),
            nature: self.nature.clone(),
            evs: self.evs,
            ivs: self.ivs,
            moves: self.moves.clone(),
            boosts: self.boosts,
            ..CombatantConfig::default()
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedSet {
    pub name: String,
    #[serde(flatten)]
    pub def: SetDef,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesSets {
    pub species: String,
    pub sets: Vec<NamedSet>,
}

/// The set database: every species with its named builds, in file order.
/// Enumeration order is the scan's "first encountered" order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SetDex {
    pub species: Vec<SpeciesSets>,
}

impl SetDex {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse set database JSON")
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn set_count(&self) -> usize {
        self.species.iter().map(|s| s.sets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Iterates every (species, set) pair in database order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedSet)> {
        self.species
            .iter()
            .flat_map(|entry| entry.sets.iter().map(move |set| (entry.species.as_str(), set)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_spread_resolves_defaults() {
        let spread: PartialSpread = serde_json::from_str(r#"{"atk": 252, "spe": 4}"#).unwrap();
        let ivs = spread.resolve(31);
        assert_eq!(ivs.atk, 252);
        assert_eq!(ivs.spe, 4);
        assert_eq!(ivs.def, 31);
    }

    #[test]
    fn config_ignores_unknown_keys() {
        let config: CombatantConfig = serde_json::from_str(
            r#"{"species": "Machamp", "nature": "Adamant", "shiny": true}"#,
        )
        .unwrap();
        assert_eq!(config.species, "Machamp");
        assert_eq!(config.nature.as_deref(), Some("Adamant"));
    }

    #[test]
    fn set_dex_parses_named_sets() {
        let dex = SetDex::from_json(
            r#"[{"species": "Machamp", "sets": [
                {"name": "Greta Chop", "moves": ["Cross Chop"], "evs": {"atk": 252}},
                {"name": "Rest Talk", "tier": "frontier"}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(dex.species_count(), 1);
        assert_eq!(dex.set_count(), 2);
        let pairs: Vec<_> = dex.iter().collect();
        assert_eq!(pairs[0].0, "Machamp");
        assert_eq!(pairs[0].1.name, "Greta Chop");
        assert_eq!(pairs[1].1.def.tier.as_deref(), Some("frontier"));
    }

    #[test]
    fn stage_clamp_bounds() {
        let stages = StatStages { atk: 9, spe: -9, ..StatStages::default() }.clamped();
        assert_eq!(stages.atk, 6);
        assert_eq!(stages.spe, -6);
    }
}
