//! Threat ranking for Gen 3 trainer set databases.
//!
//! Builds combatants from raw configurations, evaluates per-move matchups
//! through a pluggable damage engine, and ranks an entire set database by how
//! dangerous each set is to the evaluated side. The main entry points are
//! [`scan::ThreatScanner`] for full-database sweeps and
//! [`matchup::MatchupEvaluator`] for single pairings.

pub mod combatant;
pub mod context;
pub mod data;
pub mod engine;
pub mod field;
pub mod filter;
pub mod matchup;
pub mod model;
pub mod scan;
pub mod stats;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::combatant::{build_combatant, Combatant, CombatantSource, Status};
    pub use crate::context::{DataContext, DataSource};
    pub use crate::engine::{DamageEngine, Gen3Engine, MoveDamage, NullEngine};
    pub use crate::field::{BattleFormat, Field, FieldOptions, Weather};
    pub use crate::matchup::{Matchup, MatchupEvaluator, MatchupOptions, MoveMatchup};
    pub use crate::model::{CombatantConfig, SetDef, SetDex};
    pub use crate::scan::{ScanOptions, TeamThreatEntry, ThreatEntry, ThreatScanner};
}
