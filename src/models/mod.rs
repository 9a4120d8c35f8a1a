//! Data models
//!
//! Value types shared by the nutrition resolver, the health calculators, and
//! the service layers.

mod health;
mod nutrition;
mod vitals;

pub use health::{BmiCategory, HealthMetricsResult};
pub use nutrition::NutritionRecord;
pub use vitals::{
    ActivityLevel, Gender, NumericField, UserVitals, VitalsInput, MAX_AGE, MIN_AGE,
};
