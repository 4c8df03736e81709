use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::signals::{ActionSpeed, DeviceContext, Signals, TimeOfDay};

/// Upper bound of the reliability scale.
pub const MAX_SCORE: u8 = 100;

/// A reliability score on the integer scale `[0, 100]`.
///
/// Higher means the current behaviour looks more trustworthy. Scores are
/// always derived from [`Signals`] and never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReliabilityScore(u8);

impl ReliabilityScore {
    /// Wraps a raw value, saturating at [`MAX_SCORE`].
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ReliabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tertiary access classification derived from a [`ReliabilityScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustStatus {
    /// Full access.
    Stable,
    /// Access continues under monitoring.
    Warning,
    /// Access is restricted.
    Limited,
}

impl TrustStatus {
    /// Label shown in the simulator's "Access State" row.
    #[must_use]
    pub const fn access_label(self) -> &'static str {
        match self {
            Self::Stable => "Full Access",
            Self::Warning => "Monitored",
            Self::Limited => "Limited",
        }
    }

    /// Wire name, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Warning => "warning",
            Self::Limited => "limited",
        }
    }
}

impl fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ScoringConfig {
    /// Total penalty for a signal set, before clamping.
    #[must_use]
    pub fn penalty(&self, signals: &Signals) -> f64 {
        let stress = f64::from(signals.stress_level) / 100.0 * self.stress_weight;
        let speed = match signals.action_speed {
            ActionSpeed::Normal => 0,
            ActionSpeed::Rapid => self.rapid_penalty,
            ActionSpeed::VeryRapid => self.very_rapid_penalty,
        };
        let device = match signals.device_context {
            DeviceContext::Known => 0,
            DeviceContext::New => self.new_device_penalty,
            DeviceContext::Suspicious => self.suspicious_device_penalty,
        };
        let time = match signals.time_of_day {
            TimeOfDay::WorkingHours => 0,
            TimeOfDay::OffHours => self.off_hours_penalty,
        };
        stress + f64::from(speed) + f64::from(device) + f64::from(time)
    }

    /// Additive penalty model: `round(clamp(100 - penalty, 0, 100))`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is rounded and clamped to [0, 100] before the cast"
    )]
    pub fn score(&self, signals: &Signals) -> ReliabilityScore {
        let raw = f64::from(MAX_SCORE) - self.penalty(signals);
        let clamped = raw.round().clamp(0.0, f64::from(MAX_SCORE));
        ReliabilityScore(clamped as u8)
    }

    /// Step function with inclusive lower bounds.
    #[must_use]
    pub fn classify(&self, score: ReliabilityScore) -> TrustStatus {
        if score.0 >= self.stable_threshold {
            TrustStatus::Stable
        } else if score.0 >= self.limited_threshold {
            TrustStatus::Warning
        } else {
            TrustStatus::Limited
        }
    }
}

/// Computes the reliability score with the built-in constants.
///
/// Pure and deterministic. Stress outside `0..=100` is not rejected; the
/// clamp keeps the result in range.
#[must_use]
pub fn calculate_reliability_score(
    stress_level: u32,
    action_speed: ActionSpeed,
    device_context: DeviceContext,
    time_of_day: TimeOfDay,
) -> ReliabilityScore {
    let signals = Signals::new(stress_level, action_speed, device_context, time_of_day);
    ScoringConfig::default().score(&signals)
}

/// Classifies a score with the built-in thresholds (70 stable, 40 warning).
#[must_use]
pub fn classify(score: ReliabilityScore) -> TrustStatus {
    ScoringConfig::default().classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_signals_score_96() {
        let score = ScoringConfig::default().score(&Signals::default());
        assert_eq!(score.value(), 96);
    }

    #[test]
    fn worst_case_signals_clamp_to_zero() {
        let score = calculate_reliability_score(
            80,
            ActionSpeed::VeryRapid,
            DeviceContext::Suspicious,
            TimeOfDay::OffHours,
        );
        assert_eq!(score.value(), 0, "raw -7 must clamp to 0");
    }

    #[test]
    fn stress_above_hundred_is_absorbed_by_clamp() {
        let score = calculate_reliability_score(
            10_000,
            ActionSpeed::Normal,
            DeviceContext::Known,
            TimeOfDay::WorkingHours,
        );
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn fractional_stress_penalty_rounds_to_nearest() {
        // 100 - 33 * 0.4 = 86.8
        let score = calculate_reliability_score(
            33,
            ActionSpeed::Normal,
            DeviceContext::Known,
            TimeOfDay::WorkingHours,
        );
        assert_eq!(score.value(), 87);
        // 100 - 1 * 0.4 = 99.6
        let score = calculate_reliability_score(
            1,
            ActionSpeed::Normal,
            DeviceContext::Known,
            TimeOfDay::WorkingHours,
        );
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn classify_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify(ReliabilityScore::new(100)), TrustStatus::Stable);
        assert_eq!(classify(ReliabilityScore::new(70)), TrustStatus::Stable);
        assert_eq!(classify(ReliabilityScore::new(69)), TrustStatus::Warning);
        assert_eq!(classify(ReliabilityScore::new(40)), TrustStatus::Warning);
        assert_eq!(classify(ReliabilityScore::new(39)), TrustStatus::Limited);
        assert_eq!(classify(ReliabilityScore::new(0)), TrustStatus::Limited);
    }

    #[test]
    fn reliability_score_new_saturates() {
        assert_eq!(ReliabilityScore::new(250).value(), MAX_SCORE);
    }

    #[test]
    fn access_labels_match_dashboard_copy() {
        assert_eq!(TrustStatus::Stable.access_label(), "Full Access");
        assert_eq!(TrustStatus::Warning.access_label(), "Monitored");
        assert_eq!(TrustStatus::Limited.access_label(), "Limited");
    }

    #[test]
    fn custom_config_changes_penalties() {
        let config = ScoringConfig { off_hours_penalty: 30, ..ScoringConfig::default() };
        let signals = Signals { time_of_day: TimeOfDay::OffHours, ..Signals::default() };
        assert_eq!(config.score(&signals).value(), 66);
        assert_eq!(config.classify(config.score(&signals)), TrustStatus::Warning);
    }
}
