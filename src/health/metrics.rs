//! Body metrics
//!
//! BMI, BMI banding, Mifflin-St Jeor BMR, and activity-scaled daily calories.
//!
//! # Reference
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//! expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.

use crate::error::{HealthError, ValidationError};
use crate::models::{
    ActivityLevel, BmiCategory, Gender, HealthMetricsResult, VitalsInput, MAX_AGE, MIN_AGE,
};

const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
const BMI_OVERWEIGHT_FROM: f64 = 24.0;
const BMI_OBESE_FROM: f64 = 28.0;

const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn check_weight(weight_kg: f64) -> Result<(), HealthError> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(HealthError::InvalidWeight(weight_kg))
    }
}

fn check_height(height_m: f64) -> Result<(), HealthError> {
    if height_m.is_finite() && height_m > 0.0 {
        Ok(())
    } else {
        Err(HealthError::InvalidHeight(height_m))
    }
}

/// Body mass index, weight(kg) / height(m)², to one decimal
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64, HealthError> {
    check_weight(weight_kg)?;
    check_height(height_m)?;
    Ok(round_to_tenth(weight_kg / (height_m * height_m)))
}

/// Band a BMI value. Each band includes its lower bound.
///
/// Negative or NaN input has no category.
pub fn bmi_category(bmi: f64) -> Option<BmiCategory> {
    if bmi.is_nan() || bmi < 0.0 {
        return None;
    }
    let category = if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Some(category)
}

/// Basal metabolic rate in kcal/day, rounded
///
/// `gender` accepts English or Chinese tokens (`male`, `男`, `female`, `女`, ...).
pub fn bmr(age: u32, gender: &str, weight_kg: f64, height_m: f64) -> Result<i64, HealthError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(HealthError::InvalidAge(age as f64));
    }
    check_weight(weight_kg)?;
    check_height(height_m)?;
    let gender = Gender::from_str(gender)
        .ok_or_else(|| HealthError::UnrecognizedGender(gender.trim().to_string()))?;

    Ok(mifflin_st_jeor(age, gender, weight_kg, height_m).round() as i64)
}

fn mifflin_st_jeor(age: u32, gender: Gender, weight_kg: f64, height_m: f64) -> f64 {
    let height_cm = height_m * 100.0;
    let offset = match gender {
        Gender::Male => MALE_OFFSET,
        Gender::Female => FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

/// Activity factor for a level name; unknown names get the sedentary factor
pub fn activity_factor(activity_level: &str) -> f64 {
    ActivityLevel::from_str(activity_level)
        .unwrap_or_default()
        .factor()
}

/// Estimated daily calorie needs (TDEE): rounded BMR × activity factor
pub fn daily_calories(
    age: u32,
    gender: &str,
    weight_kg: f64,
    height_m: f64,
    activity_level: &str,
) -> Result<i64, HealthError> {
    let bmr = bmr(age, gender, weight_kg, height_m)?;
    Ok((bmr as f64 * activity_factor(activity_level)).round() as i64)
}

/// Validate caller input and compute every metric in one pass
pub fn compute_health(input: &VitalsInput) -> Result<HealthMetricsResult, ValidationError> {
    let vitals = input.validate()?;
    let gender = vitals.gender.as_str();

    let bmi = bmi(vitals.weight_kg, vitals.height_m)?;
    let bmi_category = bmi_category(bmi).ok_or(HealthError::InvalidWeight(vitals.weight_kg))?;
    let bmr = bmr(vitals.age, gender, vitals.weight_kg, vitals.height_m)?;
    let daily_calories = daily_calories(
        vitals.age,
        gender,
        vitals.weight_kg,
        vitals.height_m,
        &vitals.activity_level,
    )?;

    tracing::debug!(bmi, bmr, daily_calories, "health metrics computed");

    Ok(HealthMetricsResult {
        bmi,
        bmi_category,
        bmi_category_label: bmi_category.display_name().to_string(),
        bmr,
        daily_calories,
        activity_level: vitals.activity_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(age: f64, gender: &str, weight: f64, height: f64, level: Option<&str>) -> VitalsInput {
        VitalsInput {
            age: Some(age.into()),
            gender: Some(gender.into()),
            weight: Some(weight.into()),
            height: Some(height.into()),
            activity_level: level.map(Into::into),
        }
    }

    #[test]
    fn test_bmi() {
        assert_eq!(bmi(70.0, 1.75).unwrap(), 22.9);
        assert_eq!(bmi(50.0, 1.6).unwrap(), 19.5);
    }

    #[test]
    fn test_bmi_invalid_input() {
        assert_eq!(bmi(0.0, 1.75), Err(HealthError::InvalidWeight(0.0)));
        assert_eq!(bmi(70.0, 0.0), Err(HealthError::InvalidHeight(0.0)));
        assert!(bmi(-70.0, 1.75).is_err());
        assert!(bmi(f64::NAN, 1.75).is_err());
        assert!(bmi(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_round_to_tenth_half_away_from_zero() {
        assert_eq!(round_to_tenth(22.25), 22.3);
        assert_eq!(round_to_tenth(22.24), 22.2);
        assert_eq!(round_to_tenth(18.45), 18.5);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.49), Some(BmiCategory::Underweight));
        assert_eq!(bmi_category(18.5), Some(BmiCategory::Normal));
        assert_eq!(bmi_category(23.9), Some(BmiCategory::Normal));
        assert_eq!(bmi_category(24.0), Some(BmiCategory::Overweight));
        assert_eq!(bmi_category(27.99), Some(BmiCategory::Overweight));
        assert_eq!(bmi_category(28.0), Some(BmiCategory::Obese));
        assert_eq!(bmi_category(0.0), Some(BmiCategory::Underweight));
    }

    #[test]
    fn test_bmi_category_invalid() {
        assert_eq!(bmi_category(-1.0), None);
        assert_eq!(bmi_category(f64::NAN), None);
    }

    #[test]
    fn test_bmr_male() {
        assert_eq!(bmr(25, "male", 70.0, 1.75).unwrap(), 1674);
        assert_eq!(bmr(25, "男", 70.0, 1.75).unwrap(), 1674);
        assert_eq!(bmr(25, " Male ", 70.0, 1.75).unwrap(), 1674);
    }

    #[test]
    fn test_bmr_female() {
        assert_eq!(bmr(25, "female", 60.0, 1.65).unwrap(), 1345);
        assert_eq!(bmr(25, "女", 60.0, 1.65).unwrap(), 1345);
    }

    #[test]
    fn test_bmr_validation() {
        assert_eq!(bmr(9, "male", 70.0, 1.75), Err(HealthError::InvalidAge(9.0)));
        assert_eq!(bmr(101, "male", 70.0, 1.75), Err(HealthError::InvalidAge(101.0)));
        assert!(bmr(10, "male", 70.0, 1.75).is_ok());
        assert!(bmr(100, "male", 70.0, 1.75).is_ok());
        assert_eq!(bmr(25, "male", 0.0, 1.75), Err(HealthError::InvalidWeight(0.0)));
        assert_eq!(bmr(25, "male", 70.0, -1.0), Err(HealthError::InvalidHeight(-1.0)));
    }

    #[test]
    fn test_bmr_unrecognized_gender() {
        let err = bmr(25, "robot", 70.0, 1.75).unwrap_err();
        assert_eq!(err, HealthError::UnrecognizedGender("robot".to_string()));
        assert!(err.is_gender_error());
    }

    #[test]
    fn test_bmr_is_deterministic() {
        let first = bmr(40, "female", 62.5, 1.68).unwrap();
        for _ in 0..10 {
            assert_eq!(bmr(40, "female", 62.5, 1.68).unwrap(), first);
        }
    }

    #[test]
    fn test_daily_calories() {
        assert_eq!(daily_calories(25, "male", 70.0, 1.75, "sedentary").unwrap(), 2009);
        assert_eq!(daily_calories(25, "male", 70.0, 1.75, "moderate").unwrap(), 2595);
        assert_eq!(daily_calories(25, "male", 70.0, 1.75, "veryActive").unwrap(), 3181);
    }

    #[test]
    fn test_daily_calories_unknown_level_falls_back_to_sedentary() {
        let unknown = daily_calories(30, "male", 80.0, 1.80, "unknownLevel").unwrap();
        let sedentary = daily_calories(30, "male", 80.0, 1.80, "sedentary").unwrap();
        assert_eq!(unknown, sedentary);
        // bmr = 800 + 1125 - 150 + 5 = 1780
        assert_eq!(unknown, 2136);
    }

    #[test]
    fn test_daily_calories_misspelled_level_is_unknown() {
        assert_eq!(daily_calories(25, "male", 70.0, 1.75, "Moderate").unwrap(), 2009);
        assert_eq!(daily_calories(25, "male", 70.0, 1.75, "very_active").unwrap(), 2009);
    }

    #[test]
    fn test_daily_calories_propagates_bmr_error() {
        assert!(daily_calories(25, "?", 70.0, 1.75, "light").is_err());
        assert!(daily_calories(5, "male", 70.0, 1.75, "light").is_err());
    }

    #[test]
    fn test_compute_health() {
        let result = compute_health(&vitals(25.0, "男", 70.0, 1.75, Some("moderate"))).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.bmi_category, BmiCategory::Normal);
        assert_eq!(result.bmi_category_label, "正常");
        assert_eq!(result.bmr, 1674);
        assert_eq!(result.daily_calories, 2595);
        assert_eq!(result.activity_level, "moderate");
    }

    #[test]
    fn test_compute_health_echoes_unknown_level() {
        let result = compute_health(&vitals(25.0, "male", 70.0, 1.75, Some("couch"))).unwrap();
        assert_eq!(result.activity_level, "couch");
        assert_eq!(result.daily_calories, 2009);
    }

    #[test]
    fn test_compute_health_reports_every_field() {
        let err = compute_health(&vitals(200.0, "x", -3.0, 1.7, None)).unwrap_err();
        assert_eq!(err.0.len(), 3);
        let message = err.to_string();
        assert!(message.contains("age must be"));
        assert!(message.contains("; unrecognized gender 'x'"));
        assert!(message.contains("; weight must be"));
    }

    #[test]
    fn test_functions_share_no_state() {
        let before = bmi(70.0, 1.75).unwrap();
        let _ = daily_calories(25, "male", 70.0, 1.75, "active").unwrap();
        let calories_as_bmi = bmi_category(1674.0);
        assert_eq!(calories_as_bmi, Some(BmiCategory::Obese));
        assert_eq!(bmi(70.0, 1.75).unwrap(), before);
    }
}
