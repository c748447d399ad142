//! Built-in Gen 3 (ADV) data tables.
//!
//! Tables are keyed by normalized identifiers (lowercase alphanumerics) so
//! lookups ignore casing, spaces, and punctuation in display names.

pub mod moves;
pub mod natures;
pub mod sets;
pub mod species;
pub mod types;

#[cfg(test)]
mod tests;

/// Normalizes a display name to a table key.
pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
