//! Health calculations
//!
//! Body metrics from user vitals and report cards for recognized food.

pub mod metrics;
pub mod report;

pub use metrics::{
    activity_factor, bmi, bmi_category, bmr, compute_health, daily_calories, round_to_tenth,
};
pub use report::{
    health_score, FoodReport, HealthLevel, ReportOptions, DEFAULT_DAILY_CALORIES,
    DEFAULT_PORTION_GRAMS,
};
