//! Validation thresholds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest numeric/written difference still treated as equal.
pub const DEFAULT_AMOUNT_TOLERANCE: f64 = 0.01;
/// Fuzzy ratio below which a jurisdiction lookup fails.
pub const DEFAULT_MIN_FUZZY_RATIO: f64 = 0.6;
/// Match confidence below which a warning is recorded.
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid config: {field} = {value} ({expected})")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

/// Tunable thresholds for one pipeline.
///
/// Every field has a default, so a partial JSON document such as
/// `{"amount_tolerance": 0.5}` is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub amount_tolerance: f64,
    pub min_fuzzy_ratio: f64,
    pub low_confidence_threshold: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            amount_tolerance: DEFAULT_AMOUNT_TOLERANCE,
            min_fuzzy_ratio: DEFAULT_MIN_FUZZY_RATIO,
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ValidationConfig {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.amount_tolerance.is_finite() || self.amount_tolerance < 0.0 {
            return Err(ConfigError {
                field: "amount_tolerance",
                value: self.amount_tolerance,
                expected: "finite and >= 0",
            });
        }
        for (field, value) in [
            ("min_fuzzy_ratio", self.min_fuzzy_ratio),
            ("low_confidence_threshold", self.low_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError {
                    field,
                    value,
                    expected: "within 0..=1",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.amount_tolerance, 0.01);
        assert_eq!(config.min_fuzzy_ratio, 0.6);
        assert_eq!(config.low_confidence_threshold, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ValidationConfig::from_json(r#"{"amount_tolerance": 0.5}"#).unwrap();
        assert_eq!(config.amount_tolerance, 0.5);
        assert_eq!(config.min_fuzzy_ratio, DEFAULT_MIN_FUZZY_RATIO);
    }

    #[test]
    fn out_of_range_rejected() {
        let config = ValidationConfig {
            min_fuzzy_ratio: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "min_fuzzy_ratio");

        let config = ValidationConfig {
            amount_tolerance: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "amount_tolerance");
    }
}
