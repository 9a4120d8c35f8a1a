//! Health metric results

use serde::{Deserialize, Serialize};

/// BMI band using the Chinese adult cut-offs (24 / 28)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    /// Label shown in the app's report
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "偏瘦",
            BmiCategory::Normal => "正常",
            BmiCategory::Overweight => "超重",
            BmiCategory::Obese => "肥胖",
        }
    }
}

/// Everything computed from one set of vitals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricsResult {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmi_category_label: String,
    pub bmr: i64,
    pub daily_calories: i64,
    pub activity_level: String,
}
