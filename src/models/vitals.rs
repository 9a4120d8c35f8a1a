//! User vitals model
//!
//! Caller-supplied body measurements used by the health calculators. Nothing
//! here is persisted; vitals are validated and consumed per request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HealthError, ValidationError};

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 100;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse a gender token in English or Chinese, ignoring case and padding
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "男" | "男性" => Some(Gender::Male),
            "female" | "f" | "woman" | "女" | "女性" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

/// Activity level tiers for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Office work or studying, little exercise
    Sedentary,
    /// About 30 minutes of walking a day
    Light,
    /// About an hour of exercise a day
    Moderate,
    /// Daily training or physical labour
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }

    /// Exact key lookup; other spellings are unknown levels
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "veryActive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// Multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "久坐",
            ActivityLevel::Light => "轻度活动",
            ActivityLevel::Moderate => "中度活动",
            ActivityLevel::Active => "高强度活动",
            ActivityLevel::VeryActive => "极高强度活动",
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Sedentary
    }
}

/// Validated vitals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserVitals {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_m: f64,
    /// Activity level exactly as the caller supplied it; unknown values fall
    /// back to the sedentary factor when calories are computed
    pub activity_level: String,
}

/// A numeric field as it arrives over JSON: a number, a numeric string, or
/// something unusable
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
    Other(Value),
}

impl NumericField {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumericField::Number(n) => *n,
            NumericField::Text(s) => s.trim().parse::<f64>().ok()?,
            NumericField::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericField {
    fn from(n: f64) -> Self {
        NumericField::Number(n)
    }
}

/// Unvalidated vitals from a request body
///
/// `gender` and `activityLevel` are kept as raw JSON so a wrongly typed value
/// is reported by `validate` (or ignored) instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    #[serde(default)]
    pub age: Option<NumericField>,
    #[serde(default)]
    pub gender: Option<Value>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<NumericField>,
    /// Height in meters
    #[serde(default)]
    pub height: Option<NumericField>,
    #[serde(default)]
    pub activity_level: Option<Value>,
}

impl VitalsInput {
    /// Validate every field, reporting all failures at once
    pub fn validate(&self) -> Result<UserVitals, ValidationError> {
        let mut errors = Vec::new();

        let age = match self.age.as_ref() {
            None => {
                errors.push(HealthError::MissingField("age"));
                None
            }
            Some(field) => match field.as_f64() {
                None => {
                    errors.push(HealthError::NotANumber("age"));
                    None
                }
                Some(a) if a.fract() != 0.0 || a < MIN_AGE as f64 || a > MAX_AGE as f64 => {
                    errors.push(HealthError::InvalidAge(a));
                    None
                }
                Some(a) => Some(a as u32),
            },
        };

        let gender = match self.gender.as_ref() {
            None | Some(Value::Null) => {
                errors.push(HealthError::MissingField("gender"));
                None
            }
            Some(Value::String(token)) if token.trim().is_empty() => {
                errors.push(HealthError::MissingField("gender"));
                None
            }
            Some(Value::String(token)) => match Gender::from_str(token) {
                Some(g) => Some(g),
                None => {
                    errors.push(HealthError::UnrecognizedGender(token.trim().to_string()));
                    None
                }
            },
            Some(other) => {
                errors.push(HealthError::UnrecognizedGender(other.to_string()));
                None
            }
        };

        let weight_kg = positive_field(self.weight.as_ref(), "weight", &mut errors, HealthError::InvalidWeight);
        let height_m = positive_field(self.height.as_ref(), "height", &mut errors, HealthError::InvalidHeight);

        match (age, gender, weight_kg, height_m) {
            (Some(age), Some(gender), Some(weight_kg), Some(height_m)) if errors.is_empty() => {
                Ok(UserVitals {
                    age,
                    gender,
                    weight_kg,
                    height_m,
                    activity_level: self.activity_level_or_default(),
                })
            }
            _ => Err(ValidationError(errors)),
        }
    }

    /// The caller's level when it is a non-empty string, otherwise sedentary
    fn activity_level_or_default(&self) -> String {
        match self.activity_level.as_ref() {
            Some(Value::String(level)) if !level.trim().is_empty() => level.clone(),
            _ => ActivityLevel::Sedentary.as_str().to_string(),
        }
    }
}

fn positive_field(
    field: Option<&NumericField>,
    name: &'static str,
    errors: &mut Vec<HealthError>,
    invalid: fn(f64) -> HealthError,
) -> Option<f64> {
    match field {
        None => {
            errors.push(HealthError::MissingField(name));
            None
        }
        Some(f) => match f.as_f64() {
            None => {
                errors.push(HealthError::NotANumber(name));
                None
            }
            Some(v) if v <= 0.0 => {
                errors.push(invalid(v));
                None
            }
            Some(v) => Some(v),
        },
    }
}
