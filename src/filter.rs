//! Predicate filtering over the set database. Pure data selection; neither
//! the stat deriver nor the evaluators are involved.

use crate::context::DataContext;
use crate::model::SetDef;

/// A borrowed view of one database entry.
#[derive(Clone, Copy, Debug)]
pub struct SetRef<'a> {
    pub species: &'a str,
    pub set_name: &'a str,
    pub set: &'a SetDef,
}

/// Set names that mark the difficult frontier archetypes.
const HARD_NAME_MARKERS: [&str; 3] = ["silver", "gold", "greta"];

/// Default predicate: the set name carries a known difficult-archetype
/// marker, or the set declares an explicit tier.
pub fn is_hard_set(_species: &str, set_name: &str, set: &SetDef) -> bool {
    let lower = set_name.to_ascii_lowercase();
    if HARD_NAME_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return true;
    }
    set.tier.is_some()
}

/// Selects every database entry matching the predicate, in database order.
/// Empty when the context carries no database.
pub fn filter_sets<'a, F>(ctx: &'a DataContext, predicate: F) -> Vec<SetRef<'a>>
where
    F: Fn(&str, &str, &SetDef) -> bool,
{
    let Some(sets) = ctx.sets() else {
        return Vec::new();
    };
    sets.iter()
        .filter(|(species, named)| predicate(species, &named.name, &named.def))
        .map(|(species, named)| SetRef { species, set_name: &named.name, set: &named.def })
        .collect()
}

/// The database entries matching the default hard-set predicate.
pub fn hard_sets(ctx: &DataContext) -> Vec<SetRef<'_>> {
    filter_sets(ctx, is_hard_set)
}
