//! Food report
//!
//! Turns a recognized food and its nutrition into the app's report card: a
//! 0-100 health score, a level, one line of advice, and the share of the
//! user's daily calories the portion represents.

use serde::{Deserialize, Serialize};

use super::metrics::round_to_tenth;
use crate::models::NutritionRecord;

/// Daily calorie budget assumed when the user has no profile yet
pub const DEFAULT_DAILY_CALORIES: i64 = 2000;

/// Portion size assumed when none is given
pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;

const BASE_SCORE: i32 = 70;

/// Coarse rating derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    VeryHealthy,
    FairlyHealthy,
    BasicallyHealthy,
    NeedsAttention,
    Unhealthy,
}

impl HealthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => HealthLevel::VeryHealthy,
            75..=89 => HealthLevel::FairlyHealthy,
            60..=74 => HealthLevel::BasicallyHealthy,
            40..=59 => HealthLevel::NeedsAttention,
            _ => HealthLevel::Unhealthy,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HealthLevel::VeryHealthy => "非常健康",
            HealthLevel::FairlyHealthy => "比较健康",
            HealthLevel::BasicallyHealthy => "基本健康",
            HealthLevel::NeedsAttention => "需要注意",
            HealthLevel::Unhealthy => "不太健康",
        }
    }
}

/// Optional context for a report
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    /// Portion eaten, in grams
    pub grams: Option<f64>,
    /// Recognizer confidence, 0-100
    pub confidence: Option<f64>,
    /// The user's daily calorie estimate
    pub daily_calories: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodReport {
    pub food_name: String,
    pub grams: f64,
    pub per_100g: NutritionRecord,
    pub portion: NutritionRecord,
    pub health_score: u8,
    pub health_level: HealthLevel,
    pub health_level_label: &'static str,
    pub advice: String,
    pub daily_calories: i64,
    /// Portion calories as a percentage of `daily_calories`, one decimal
    pub daily_percentage: f64,
}

impl FoodReport {
    pub fn build(food_name: &str, per_100g: &NutritionRecord, options: ReportOptions) -> Self {
        let grams = options
            .grams
            .filter(|g| g.is_finite() && *g > 0.0)
            .unwrap_or(DEFAULT_PORTION_GRAMS);
        let daily_calories = options
            .daily_calories
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_DAILY_CALORIES);

        let portion = per_100g.for_portion(grams);
        let health_score = health_score(per_100g, options.confidence);
        let health_level = HealthLevel::from_score(health_score);

        Self {
            food_name: food_name.to_string(),
            grams,
            per_100g: *per_100g,
            portion,
            health_score,
            health_level,
            health_level_label: health_level.display_name(),
            advice: advice(food_name, per_100g, health_level),
            daily_calories,
            daily_percentage: round_to_tenth(portion.calories / daily_calories as f64 * 100.0),
        }
    }
}

/// Score a food per 100 g, starting from 70 and clamped to 0-100
pub fn health_score(nutrition: &NutritionRecord, confidence: Option<f64>) -> u8 {
    let mut score = BASE_SCORE;
    if nutrition.fat < 5.0 {
        score += 10;
    }
    if nutrition.protein > 5.0 {
        score += 10;
    }
    if nutrition.calories > 300.0 {
        score -= 10;
    }
    if confidence.is_some_and(|c| c > 90.0) {
        score += 5;
    }
    score.clamp(0, 100) as u8
}

fn advice(food_name: &str, nutrition: &NutritionRecord, level: HealthLevel) -> String {
    let detail = if nutrition.fat > 10.0 {
        "High in fat; keep the portion moderate."
    } else if nutrition.protein > 10.0 {
        "Rich in protein, good for building muscle."
    } else if nutrition.carbs > 20.0 {
        "Carbohydrate-rich; a good energy top-up after exercise."
    } else {
        "Well balanced; fine as part of an everyday diet."
    };
    format!("{} ({}): {}", food_name, level.display_name(), detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> NutritionRecord {
        NutritionRecord::new(52.0, 0.3, 13.5, 0.2)
    }

    #[test]
    fn test_health_score_rules() {
        // low fat only
        assert_eq!(health_score(&apple(), None), 80);
        assert_eq!(health_score(&apple(), Some(92.0)), 85);
        assert_eq!(health_score(&apple(), Some(90.0)), 80);
        // chicken breast: low fat and high protein
        let chicken = NutritionRecord::new(118.0, 20.8, 1.7, 2.5);
        assert_eq!(health_score(&chicken, Some(95.0)), 95);
        // chips: high fat, protein > 5, high calories
        let chips = NutritionRecord::new(536.0, 7.5, 49.2, 37.6);
        assert_eq!(health_score(&chips, None), 70);
        let chocolate = NutritionRecord::new(546.0, 4.2, 63.1, 29.7);
        assert_eq!(health_score(&chocolate, None), 60);
    }

    #[test]
    fn test_health_levels() {
        assert_eq!(HealthLevel::from_score(100), HealthLevel::VeryHealthy);
        assert_eq!(HealthLevel::from_score(90), HealthLevel::VeryHealthy);
        assert_eq!(HealthLevel::from_score(89), HealthLevel::FairlyHealthy);
        assert_eq!(HealthLevel::from_score(75), HealthLevel::FairlyHealthy);
        assert_eq!(HealthLevel::from_score(60), HealthLevel::BasicallyHealthy);
        assert_eq!(HealthLevel::from_score(40), HealthLevel::NeedsAttention);
        assert_eq!(HealthLevel::from_score(39), HealthLevel::Unhealthy);
        assert_eq!(HealthLevel::from_score(0), HealthLevel::Unhealthy);
    }

    #[test]
    fn test_report_defaults() {
        let report = FoodReport::build("苹果", &apple(), ReportOptions::default());
        assert_eq!(report.grams, 100.0);
        assert_eq!(report.daily_calories, 2000);
        assert_eq!(report.daily_percentage, 2.6);
        assert_eq!(report.health_level, HealthLevel::FairlyHealthy);
        assert_eq!(report.health_level_label, "比较健康");
        assert!(report.advice.starts_with("苹果 (比较健康)"));
        assert!(report.advice.contains("balanced"));
    }

    #[test]
    fn test_report_portion_and_budget() {
        let rice = NutritionRecord::new(130.0, 2.7, 28.6, 0.3);
        let report = FoodReport::build(
            "米饭",
            &rice,
            ReportOptions {
                grams: Some(200.0),
                confidence: None,
                daily_calories: Some(2009),
            },
        );
        assert_eq!(report.portion.calories, 260.0);
        assert_eq!(report.daily_percentage, 12.9);
        assert!(report.advice.contains("Carbohydrate"));
    }

    #[test]
    fn test_report_ignores_nonsense_options() {
        let report = FoodReport::build(
            "苹果",
            &apple(),
            ReportOptions {
                grams: Some(-5.0),
                confidence: Some(f64::NAN),
                daily_calories: Some(0),
            },
        );
        assert_eq!(report.grams, 100.0);
        assert_eq!(report.daily_calories, 2000);
        assert_eq!(report.health_score, 80);
    }

    #[test]
    fn test_advice_priority() {
        let cheese = NutritionRecord::new(328.0, 21.5, 1.3, 26.4);
        assert!(advice("芝士", &cheese, HealthLevel::BasicallyHealthy).contains("fat"));
        let shrimp = NutritionRecord::new(80.0, 16.8, 1.5, 0.8);
        assert!(advice("虾仁", &shrimp, HealthLevel::VeryHealthy).contains("protein"));
    }
}
