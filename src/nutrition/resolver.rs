//! Food name resolution
//!
//! Maps a free-text food name (from the recognizer or typed by the user) to a
//! row of the food table: normalize, substitute aliases, then take the first
//! table key that contains or is contained in the name.

use serde::Serialize;

use super::table::{FoodEntry, FOOD_ALIASES, FOOD_TABLE};
use crate::models::NutritionRecord;

/// A successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodMatch {
    /// The table key that matched
    pub name: &'static str,
    pub nutrition: NutritionRecord,
}

impl From<&'static FoodEntry> for FoodMatch {
    fn from(entry: &'static FoodEntry) -> Self {
        Self {
            name: entry.name,
            nutrition: entry.nutrition,
        }
    }
}

/// Resolver over a fixed food table and alias map
#[derive(Debug, Clone, Copy)]
pub struct NutritionResolver {
    table: &'static [FoodEntry],
    aliases: &'static [(&'static str, &'static str)],
}

impl Default for NutritionResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NutritionResolver {
    /// Resolver over the built-in table and aliases
    pub const fn builtin() -> Self {
        Self::new(FOOD_TABLE, FOOD_ALIASES)
    }

    pub const fn new(
        table: &'static [FoodEntry],
        aliases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { table, aliases }
    }

    /// All table rows in declaration order
    pub fn foods(&self) -> &'static [FoodEntry] {
        self.table
    }

    /// Alias pairs as `(alias, canonical)`
    pub fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        self.aliases
    }

    /// Resolve a food name to its nutrition row
    ///
    /// Matching is pure substring containment in both directions, scanned in
    /// table order, so the first declared key wins and very short keys can
    /// match longer unrelated names.
    pub fn resolve(&self, raw_name: &str) -> Option<FoodMatch> {
        let clean = raw_name.trim().to_lowercase();
        if clean.is_empty() {
            return None;
        }

        let name = match self.alias_for(&clean) {
            Some(canonical) => {
                tracing::debug!(alias = %clean, canonical, "food alias substituted");
                canonical.to_string()
            }
            None => clean,
        };

        let found = self.table.iter().find(|entry| {
            let key = entry.name.to_lowercase();
            key.contains(name.as_str()) || name.contains(key.as_str())
        });

        match found {
            Some(entry) => Some(FoodMatch::from(entry)),
            None => {
                tracing::debug!(name = %name, "no food table match");
                None
            }
        }
    }

    /// Resolve a JSON value; anything other than a non-empty string is a miss
    pub fn resolve_value(&self, raw: &serde_json::Value) -> Option<FoodMatch> {
        raw.as_str().and_then(|name| self.resolve(name))
    }

    fn alias_for(&self, name: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, canonical)| *canonical)
    }
}

/// Look up nutrition for a food name using the built-in tables
pub fn resolve_nutrition(name: &str) -> Option<NutritionRecord> {
    NutritionResolver::builtin()
        .resolve(name)
        .map(|found| found.nutrition)
}

/// The built-in food table in declaration order
pub fn foods() -> &'static [FoodEntry] {
    FOOD_TABLE
}
