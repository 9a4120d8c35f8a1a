//! Chileme (吃了么) Library
//!
//! Food nutrition lookup and body health metrics, served over MCP and HTTP.

pub mod build_info;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod recognition;
pub mod tools;

pub use error::{HealthError, ValidationError};
pub use health::{bmi, bmi_category, bmr, compute_health, daily_calories};
pub use nutrition::{resolve_nutrition, NutritionResolver};
