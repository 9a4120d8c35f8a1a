//! Chileme Status Tool
//!
//! Provides runtime status information about the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::nutrition::NutritionResolver;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Chileme Usage Instructions

Chileme (吃了么) looks up nutrition for recognized food and estimates a
user's body metrics and daily calorie needs.

## Looking Up Food

**Tool:** `resolve_nutrition`
- Pass the food name the recognizer returned, or what the user typed.
- Names are matched against a built-in Chinese table: `苹果`, `米饭`, `鸡胸肉`, ...
- Common variants are understood: `洋芋`/`马铃薯` → `土豆`, `西红柿` → `番茄`.
- Partial names work both ways: `红苹果` → `苹果`.
- `found: false` means there is no data for that food. It is not an error;
  tell the user no nutrition data is available.

All values are **per 100 g**: calories (kcal), protein, carbs and fat (g).

Use `list_foods` to see every supported food.

## Food Report

**Tool:** `food_report`
- `name` (required), `grams` (portion, default 100),
  `confidence` (recognizer confidence 0-100), `daily_calories`
  (from `calculate_health`, default 2000).
- Returns a 0-100 health score, a level, advice, and the share of the
  daily calorie budget the portion uses.

## Health Metrics

**Tool:** `calculate_health`
- `age`: whole years, 10-100
- `gender`: `male`/`female` or `男`/`女`
- `weight`: kilograms
- `height`: **meters** (1.75, not 175)
- `activity_level` (optional): `sedentary`, `light`, `moderate`,
  `active`, `veryActive`. Unknown values use `sedentary`.

Returns BMI (one decimal), BMI category, BMR (Mifflin-St Jeor), and daily
calories (BMR × activity factor).

| BMI | Category |
|-----|----------|
| < 18.5 | underweight (偏瘦) |
| 18.5 - 23.9 | normal (正常) |
| 24 - 27.9 | overweight (超重) |
| ≥ 28 | obese (肥胖) |

If inputs are invalid, every problem is listed in one message; relay it to
the user verbatim.

## Notes

- Results are estimates for general guidance, not medical advice.
- Nothing is stored; pass vitals on every call.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ChilemeStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Food table information
    pub food_count: usize,
    pub alias_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    resolver: NutritionResolver,
}

impl StatusTracker {
    pub fn new(resolver: NutritionResolver) -> Self {
        Self {
            start_time: Instant::now(),
            resolver,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ChilemeStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ChilemeStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            food_count: self.resolver.foods().len(),
            alias_count: self.resolver.aliases().len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_table_and_process() {
        let tracker = StatusTracker::new(NutritionResolver::builtin());
        let status = tracker.get_status();
        assert_eq!(status.food_count, 41);
        assert_eq!(status.alias_count, 7);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }

    #[test]
    fn test_status_counts_follow_resolver() {
        use crate::models::NutritionRecord;
        use crate::nutrition::FoodEntry;

        static TABLE: &[FoodEntry] = &[FoodEntry {
            name: "potato",
            nutrition: NutritionRecord::new(77.0, 2.0, 17.2, 0.2),
        }];
        static ALIASES: &[(&str, &str)] = &[("spud", "potato"), ("tater", "potato")];

        let tracker = StatusTracker::new(NutritionResolver::new(TABLE, ALIASES));
        let status = tracker.get_status();
        assert_eq!(status.food_count, 1);
        assert_eq!(status.alias_count, 2);
    }
}
