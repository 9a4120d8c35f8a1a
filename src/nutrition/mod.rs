//! Nutrition lookup module
//!
//! The built-in per-100g food table and the fuzzy name resolver over it.

pub mod resolver;
pub mod table;

pub use resolver::{foods, resolve_nutrition, FoodMatch, NutritionResolver};
pub use table::{find_exact, FoodEntry, FOOD_ALIASES, FOOD_TABLE};
