//! Human-readable breakdown of which signals are helping or hurting the score.

use serde::{Deserialize, Serialize};

use crate::signals::{ActionSpeed, DeviceContext, Signals, TimeOfDay};

/// Which dashboard row a factor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorKind {
    /// Driven by [`ActionSpeed`].
    Activity,
    /// Driven by the stress level.
    Access,
    /// Driven by [`DeviceContext`].
    Environment,
    /// Driven by [`TimeOfDay`].
    Timing,
}

/// How a factor bears on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assessment {
    Positive,
    Warning,
    Negative,
}

/// One contributing factor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub kind: FactorKind,
    pub label: &'static str,
    pub assessment: Assessment,
}

/// Assesses each signal independently. Always returns four factors, in
/// activity, access, environment, timing order.
#[must_use]
pub fn contributing_factors(signals: &Signals) -> [Factor; 4] {
    let activity = match signals.action_speed {
        ActionSpeed::Normal => ("Steady Activity Flow", Assessment::Positive),
        ActionSpeed::Rapid => ("Elevated Activity Rate", Assessment::Warning),
        ActionSpeed::VeryRapid => ("Rapid Action Pattern", Assessment::Negative),
    };
    let access = match signals.stress_level {
        0..30 => ("Authorized Access Requests", Assessment::Positive),
        30..60 => ("Unusual Access Patterns", Assessment::Warning),
        _ => ("Anomalous Access Behavior", Assessment::Negative),
    };
    let environment = match signals.device_context {
        DeviceContext::Known => ("Normal Working Environment", Assessment::Positive),
        DeviceContext::New => ("New Device Detected", Assessment::Warning),
        DeviceContext::Suspicious => ("Suspicious Environment", Assessment::Negative),
    };
    // Off-hours is never worse than a warning.
    let timing = match signals.time_of_day {
        TimeOfDay::WorkingHours => ("Standard Working Hours", Assessment::Positive),
        TimeOfDay::OffHours => ("Off-Hours Activity", Assessment::Warning),
    };

    [
        (FactorKind::Activity, activity),
        (FactorKind::Access, access),
        (FactorKind::Environment, environment),
        (FactorKind::Timing, timing),
    ]
    .map(|(kind, (label, assessment))| Factor { kind, label, assessment })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_assessment(stress_level: u32) -> Assessment {
        let signals = Signals { stress_level, ..Signals::default() };
        contributing_factors(&signals)[1].assessment
    }

    #[test]
    fn default_signals_are_all_positive() {
        let factors = contributing_factors(&Signals::default());
        assert!(
            factors.iter().all(|f| f.assessment == Assessment::Positive),
            "defaults must not flag any factor: {factors:?}"
        );
    }

    #[test]
    fn stress_bands_switch_at_30_and_60() {
        assert_eq!(access_assessment(29), Assessment::Positive);
        assert_eq!(access_assessment(30), Assessment::Warning);
        assert_eq!(access_assessment(59), Assessment::Warning);
        assert_eq!(access_assessment(60), Assessment::Negative);
    }

    #[test]
    fn worst_signals_produce_expected_labels() {
        let signals = Signals::new(
            90,
            ActionSpeed::VeryRapid,
            DeviceContext::Suspicious,
            TimeOfDay::OffHours,
        );
        let labels: Vec<_> = contributing_factors(&signals).iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            [
                "Rapid Action Pattern",
                "Anomalous Access Behavior",
                "Suspicious Environment",
                "Off-Hours Activity",
            ]
        );
    }
}
