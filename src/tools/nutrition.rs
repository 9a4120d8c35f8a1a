//! Nutrition Tools
//!
//! Food lookup, table listing, and food reports.

use serde::Serialize;

use crate::health::{FoodReport, ReportOptions};
use crate::models::NutritionRecord;
use crate::nutrition::{FoodEntry, NutritionResolver};

/// Response for resolve_nutrition
#[derive(Debug, Serialize)]
pub struct ResolveNutritionResponse {
    pub query: String,
    pub found: bool,
    /// Table entry the query resolved to
    pub matched_name: Option<&'static str>,
    pub nutrition: Option<NutritionRecord>,
}

/// One row of list_foods
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&FoodEntry> for FoodSummary {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            name: entry.name,
            calories: entry.nutrition.calories,
            protein: entry.nutrition.protein,
            carbs: entry.nutrition.carbs,
            fat: entry.nutrition.fat,
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub items: Vec<FoodSummary>,
    pub total: usize,
    /// Values are per 100 g
    pub basis: &'static str,
}

/// Response for food_report
#[derive(Debug, Serialize)]
pub struct FoodReportResponse {
    pub query: String,
    pub found: bool,
    pub report: Option<FoodReport>,
}

fn require_name(name: &str) -> Result<&str, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    Ok(trimmed)
}

/// Resolve a food name against the built-in table
pub fn resolve_nutrition(resolver: &NutritionResolver, name: &str) -> Result<ResolveNutritionResponse, String> {
    let query = require_name(name)?;
    let found = resolver.resolve(query);

    Ok(ResolveNutritionResponse {
        query: query.to_string(),
        found: found.is_some(),
        matched_name: found.map(|m| m.name),
        nutrition: found.map(|m| m.nutrition),
    })
}

/// List the whole food table in lookup order
pub fn list_foods(resolver: &NutritionResolver) -> ListFoodsResponse {
    let items: Vec<FoodSummary> = resolver.foods().iter().map(FoodSummary::from).collect();
    let total = items.len();

    ListFoodsResponse {
        items,
        total,
        basis: "per 100g",
    }
}

/// Build a report card for a food name
pub fn food_report(
    resolver: &NutritionResolver,
    name: &str,
    options: ReportOptions,
) -> Result<FoodReportResponse, String> {
    let query = require_name(name)?;

    if let Some(grams) = options.grams {
        if !grams.is_finite() || grams <= 0.0 {
            return Err("grams must be greater than 0".to_string());
        }
    }
    if let Some(confidence) = options.confidence {
        if !(0.0..=100.0).contains(&confidence) {
            return Err("confidence must be between 0 and 100".to_string());
        }
    }
    if let Some(daily) = options.daily_calories {
        if daily <= 0 {
            return Err("daily_calories must be greater than 0".to_string());
        }
    }

    let report = resolver
        .resolve(query)
        .map(|found| FoodReport::build(found.name, &found.nutrition, options));

    Ok(FoodReportResponse {
        query: query.to_string(),
        found: report.is_some(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_found() {
        let resolver = NutritionResolver::builtin();
        let response = resolve_nutrition(&resolver, " 西红柿 ").unwrap();
        assert_eq!(response.query, "西红柿");
        assert!(response.found);
        assert_eq!(response.matched_name, Some("番茄"));
        assert_eq!(response.nutrition.unwrap().calories, 18.0);
    }

    #[test]
    fn test_resolve_not_found_is_not_an_error() {
        let resolver = NutritionResolver::builtin();
        let response = resolve_nutrition(&resolver, "披萨").unwrap();
        assert!(!response.found);
        assert!(response.nutrition.is_none());
    }

    #[test]
    fn test_resolve_rejects_blank() {
        let resolver = NutritionResolver::builtin();
        assert!(resolve_nutrition(&resolver, "  ").is_err());
    }

    #[test]
    fn test_list_foods() {
        let response = list_foods(&NutritionResolver::builtin());
        assert_eq!(response.total, response.items.len());
        assert_eq!(response.items[0].name, "米饭");
    }

    #[test]
    fn test_food_report_uses_matched_name() {
        let resolver = NutritionResolver::builtin();
        let response = food_report(&resolver, "红苹果", ReportOptions::default()).unwrap();
        let report = response.report.unwrap();
        assert_eq!(report.food_name, "苹果");
        assert_eq!(report.health_score, 80);
    }

    #[test]
    fn test_food_report_validates_options() {
        let resolver = NutritionResolver::builtin();
        let bad_grams = ReportOptions {
            grams: Some(0.0),
            ..ReportOptions::default()
        };
        assert!(food_report(&resolver, "苹果", bad_grams).is_err());

        let bad_confidence = ReportOptions {
            confidence: Some(120.0),
            ..ReportOptions::default()
        };
        assert!(food_report(&resolver, "苹果", bad_confidence).is_err());
    }

    #[test]
    fn test_food_report_unknown_food() {
        let resolver = NutritionResolver::builtin();
        let response = food_report(&resolver, "披萨", ReportOptions::default()).unwrap();
        assert!(!response.found);
        assert!(response.report.is_none());
    }
}
