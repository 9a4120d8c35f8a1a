//! Error types for the health calculators

use thiserror::Error;

/// A single rejected input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("age must be a whole number between 10 and 100, got {0}")]
    InvalidAge(f64),

    #[error("weight must be a positive number in kg, got {0}")]
    InvalidWeight(f64),

    #[error("height must be a positive number in meters, got {0}")]
    InvalidHeight(f64),

    #[error("unrecognized gender '{0}' (expected male/female/男/女)")]
    UnrecognizedGender(String),
}

impl HealthError {
    /// Gender problems get their own user-facing message upstream
    pub fn is_gender_error(&self) -> bool {
        matches!(self, HealthError::UnrecognizedGender(_))
    }
}

/// All problems found in one set of vitals
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid parameters: {}", join_messages(.0))]
pub struct ValidationError(pub Vec<HealthError>);

impl From<HealthError> for ValidationError {
    fn from(err: HealthError) -> Self {
        ValidationError(vec![err])
    }
}

fn join_messages(errors: &[HealthError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_semicolon_joined() {
        let err = ValidationError(vec![
            HealthError::MissingField("age"),
            HealthError::InvalidWeight(0.0),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid parameters: age is required; weight must be a positive number in kg, got 0"
        );
    }

    #[test]
    fn test_gender_error_is_distinct() {
        assert!(HealthError::UnrecognizedGender("x".into()).is_gender_error());
        assert!(!HealthError::InvalidAge(5.0).is_gender_error());
    }
}
