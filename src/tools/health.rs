//! Health Tools
//!
//! BMI / BMR / daily calorie calculation for a set of vitals.

use crate::error::ValidationError;
use crate::health::compute_health;
use crate::models::{HealthMetricsResult, VitalsInput};

/// Calculate all health metrics; validation failures carry every bad field
pub fn calculate_health(input: &VitalsInput) -> Result<HealthMetricsResult, ValidationError> {
    let result = compute_health(input);
    if let Err(ref e) = result {
        tracing::info!(errors = e.0.len(), "health calculation rejected: {}", e);
    }
    result
}
