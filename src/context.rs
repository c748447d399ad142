//! Explicit data context.
//!
//! Every component receives a [`DataContext`] at construction instead of
//! reaching for shared tables. Callers assemble the context from an ordered
//! list of [`DataSource`] candidates; the first candidate supplying a table
//! wins, and the built-in ADV tables are the final fallback. The set
//! database is only present when some candidate (or the built-in dataset)
//! provides one, which is what lets a scan degrade to an empty result
//! instead of failing.

use crate::data::moves::MoveData;
use crate::data::natures::NatureData;
use crate::data::species::{SpeciesData, POKEDEX, UNKNOWN_SPECIES};
use crate::data::types::{effectiveness_against, Type};
use crate::data::{moves, natures, normalize_id, sets};
use crate::model::SetDex;
use crate::stats::Stat;

/// One candidate bundle of tables. Any subset may be supplied.
#[derive(Clone, Default)]
pub struct DataSource {
    pub pokedex: Option<&'static phf::Map<&'static str, SpeciesData>>,
    pub moves: Option<&'static phf::Map<&'static str, MoveData>>,
    pub natures: Option<&'static phf::Map<&'static str, NatureData>>,
    pub chart: Option<fn(Type, Type) -> f32>,
    pub sets: Option<SetDex>,
}

#[derive(Clone)]
pub struct DataContext {
    pokedex: &'static phf::Map<&'static str, SpeciesData>,
    moves: &'static phf::Map<&'static str, MoveData>,
    natures: &'static phf::Map<&'static str, NatureData>,
    chart: fn(Type, Type) -> f32,
    sets: Option<SetDex>,
}

/// Species lookup result. `Unknown` resolves to a placeholder entry so that
/// builds never fail on missing data.
#[derive(Clone, Copy, Debug)]
pub enum SpeciesLookup {
    Known(&'static SpeciesData),
    Unknown,
}

impl SpeciesLookup {
    pub fn known(self) -> Option<&'static SpeciesData> {
        match self {
            SpeciesLookup::Known(data) => Some(data),
            SpeciesLookup::Unknown => None,
        }
    }

    pub fn or_placeholder(self) -> &'static SpeciesData {
        self.known().unwrap_or(&UNKNOWN_SPECIES)
    }
}

/// Move lookup result. `Unknown` is normalized into the zero-power
/// placeholder move by the combatant builder.
#[derive(Clone, Copy, Debug)]
pub enum MoveLookup {
    Known(&'static MoveData),
    Unknown,
}

impl DataContext {
    /// The built-in ADV dataset, set database included.
    pub fn adv() -> Self {
        Self {
            pokedex: &POKEDEX,
            moves: &moves::MOVES,
            natures: &natures::NATURES,
            chart: effectiveness_against,
            sets: Some(sets::builtin_sets().clone()),
        }
    }

    /// Resolves a context from ordered candidates; the first candidate that
    /// supplies a table wins. Tables no candidate supplies fall back to the
    /// built-in ADV data, except the set database, which stays absent.
    pub fn resolve(candidates: &[DataSource]) -> Self {
        Self {
            pokedex: candidates
                .iter()
                .find_map(|c| c.pokedex)
                .unwrap_or(&POKEDEX),
            moves: candidates
                .iter()
                .find_map(|c| c.moves)
                .unwrap_or(&moves::MOVES),
            natures: candidates
                .iter()
                .find_map(|c| c.natures)
                .unwrap_or(&natures::NATURES),
            chart: candidates
                .iter()
                .find_map(|c| c.chart)
                .unwrap_or(effectiveness_against),
            sets: candidates.iter().find_map(|c| c.sets.clone()),
        }
    }

    /// Replaces the set database, or removes it with `None`.
    pub fn with_sets(mut self, sets: Option<SetDex>) -> Self {
        self.sets = sets;
        self
    }

    pub fn species(&self, name: &str) -> SpeciesLookup {
        match self.pokedex.get(normalize_id(name).as_str()) {
            Some(data) => SpeciesLookup::Known(data),
            None => SpeciesLookup::Unknown,
        }
    }

    pub fn move_data(&self, name: &str) -> MoveLookup {
        match self.moves.get(normalize_id(name).as_str()) {
            Some(data) => MoveLookup::Known(data),
            None => MoveLookup::Unknown,
        }
    }

    /// Nature multiplier for a stat: 1.1 raised, 0.9 lowered, 1.0 otherwise.
    /// Unknown natures are neutral, never an error.
    pub fn nature_multiplier(&self, nature: &str, stat: Stat) -> f64 {
        match self.natures.get(normalize_id(nature).as_str()) {
            Some(data) if data.plus == Some(stat) => 1.1,
            Some(data) if data.minus == Some(stat) => 0.9,
            _ => 1.0,
        }
    }

    pub fn effectiveness(&self, attacking: Type, defending: Type) -> f32 {
        (self.chart)(attacking, defending)
    }

    pub fn sets(&self) -> Option<&SetDex> {
        self.sets.as_ref()
    }
}
