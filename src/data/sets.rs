use crate::model::SetDex;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<SetDex> = Lazy::new(|| {
    SetDex::from_json(include_str!("sets.json")).expect("embedded set database parses")
});

/// The built-in frontier set database.
pub fn builtin_sets() -> &'static SetDex {
    &BUILTIN
}
