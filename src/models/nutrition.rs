//! Nutrition record
//!
//! Per-100g nutrition values shared by the food table, lookups, and reports.

use serde::{Deserialize, Serialize};

/// Nutritional information per 100 grams of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub calories: f64, // kcal
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

impl NutritionRecord {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Nutrition for a portion of the given weight in grams
    pub fn for_portion(&self, grams: f64) -> Self {
        self.scale(grams / 100.0)
    }
}

impl std::ops::Mul<f64> for NutritionRecord {
    type Output = NutritionRecord;

    fn mul(self, multiplier: f64) -> NutritionRecord {
        self.scale(multiplier)
    }
}
