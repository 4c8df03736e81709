//! Scoring configuration: penalty weights, status thresholds and policies.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::policy::{default_policies, AccessPolicy};
use crate::score::MAX_SCORE;

/// Tunable constants behind the reliability score.
///
/// [`ScoringConfig::default`] reproduces the dashboard's built-in model.
/// Missing fields in a JSON document fall back to those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ScoringConfig {
    /// Lowest score classified as stable.
    pub stable_threshold: u8,

    /// Lowest score classified as warning. Anything below is limited and
    /// opens the access-adjusted prompt.
    pub limited_threshold: u8,

    /// Points removed at 100% stress, scaled linearly.
    pub stress_weight: f64,

    /// Penalty for [`ActionSpeed::Rapid`](crate::ActionSpeed::Rapid).
    pub rapid_penalty: u32,

    /// Penalty for [`ActionSpeed::VeryRapid`](crate::ActionSpeed::VeryRapid).
    pub very_rapid_penalty: u32,

    /// Penalty for [`DeviceContext::New`](crate::DeviceContext::New).
    pub new_device_penalty: u32,

    /// Penalty for [`DeviceContext::Suspicious`](crate::DeviceContext::Suspicious).
    pub suspicious_device_penalty: u32,

    /// Penalty for [`TimeOfDay::OffHours`](crate::TimeOfDay::OffHours).
    pub off_hours_penalty: u32,

    /// Adaptive access policies evaluated against the score.
    pub policies: Vec<AccessPolicy>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stable_threshold: 70,
            limited_threshold: 40,
            stress_weight: 40.0,
            rapid_penalty: 15,
            very_rapid_penalty: 30,
            new_device_penalty: 15,
            suspicious_device_penalty: 35,
            off_hours_penalty: 10,
            policies: default_policies(),
        }
    }
}

impl ScoringConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// # Errors
    /// Returns [`CoreError::ConfigParse`] on malformed JSON and
    /// [`CoreError::InvalidScoringConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks threshold ordering and weight sanity.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidScoringConfig`] describing the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.stable_threshold > MAX_SCORE {
            return Err(invalid(format!(
                "stable_threshold {} exceeds {MAX_SCORE}",
                self.stable_threshold
            )));
        }
        if self.limited_threshold > self.stable_threshold {
            return Err(invalid(format!(
                "limited_threshold {} is above stable_threshold {}",
                self.limited_threshold, self.stable_threshold
            )));
        }
        if !self.stress_weight.is_finite() || self.stress_weight < 0.0 {
            return Err(invalid(format!(
                "stress_weight {} must be a finite non-negative number",
                self.stress_weight
            )));
        }
        // A worse signal must never score higher than a milder one.
        if self.rapid_penalty > self.very_rapid_penalty {
            return Err(invalid(format!(
                "rapid_penalty {} is above very_rapid_penalty {}",
                self.rapid_penalty, self.very_rapid_penalty
            )));
        }
        if self.new_device_penalty > self.suspicious_device_penalty {
            return Err(invalid(format!(
                "new_device_penalty {} is above suspicious_device_penalty {}",
                self.new_device_penalty, self.suspicious_device_penalty
            )));
        }
        if let Some(policy) = self.policies.iter().find(|p| p.trust_threshold > MAX_SCORE) {
            return Err(invalid(format!(
                "policy '{}' threshold {} exceeds {MAX_SCORE}",
                policy.name, policy.trust_threshold
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> CoreError {
    CoreError::InvalidScoringConfig { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = match ScoringConfig::from_json_str(r#"{"off_hours_penalty": 20}"#) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.off_hours_penalty, 20);
        assert_eq!(config.stable_threshold, 70, "unspecified fields keep their defaults");
        assert_eq!(config.policies.len(), 4);
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let result = ScoringConfig::from_json_str(
            r#"{"stable_threshold": 50, "limited_threshold": 60}"#,
        );
        assert!(
            matches!(result, Err(CoreError::InvalidScoringConfig { .. })),
            "limited above stable must fail validation"
        );
    }

    #[test]
    fn negative_stress_weight_is_rejected() {
        let config = ScoringConfig { stress_weight: -1.0, ..ScoringConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_speed_penalties_are_rejected() {
        let result = ScoringConfig::from_json_str(r#"{"rapid_penalty": 50, "very_rapid_penalty": 0}"#);
        assert!(
            matches!(result, Err(CoreError::InvalidScoringConfig { .. })),
            "very-rapid must cost at least as much as rapid"
        );
    }

    #[test]
    fn inverted_device_penalties_are_rejected() {
        let config = ScoringConfig {
            new_device_penalty: 40,
            suspicious_device_penalty: 35,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidScoringConfig { .. })));
    }

    #[test]
    fn equal_penalties_are_accepted() {
        let config = ScoringConfig {
            rapid_penalty: 20,
            very_rapid_penalty: 20,
            new_device_penalty: 0,
            suspicious_device_penalty: 0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_maps_to_parse_error() {
        let result = ScoringConfig::from_json_str("{not json");
        assert!(matches!(result, Err(CoreError::ConfigParse(_))));
    }
}
