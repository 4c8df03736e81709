//! Behavioural input signals that feed the reliability score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stress level applied when a session starts or is reset.
pub const DEFAULT_STRESS_LEVEL: u32 = 10;

/// How quickly the user is issuing actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionSpeed {
    /// Ordinary pacing.
    #[default]
    Normal,
    /// Noticeably faster than usual.
    Rapid,
    /// Burst activity, typical of scripted or panicked use.
    VeryRapid,
}

/// The device the session originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceContext {
    /// A device previously seen for this user.
    #[default]
    Known,
    /// A device never seen before.
    New,
    /// A device flagged as untrusted.
    Suspicious,
}

/// Whether activity falls inside working hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    /// Regular working hours.
    #[default]
    WorkingHours,
    /// Evenings, nights and weekends.
    OffHours,
}

impl ActionSpeed {
    /// All variants, ordered from least to most penalised.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Rapid, Self::VeryRapid];

    /// Wire name used by the console and in serialized snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Rapid => "rapid",
            Self::VeryRapid => "very-rapid",
        }
    }
}

impl DeviceContext {
    /// All variants, ordered from least to most penalised.
    pub const ALL: [Self; 3] = [Self::Known, Self::New, Self::Suspicious];

    /// Wire name used by the console and in serialized snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Known => "known",
            Self::New => "new",
            Self::Suspicious => "suspicious",
        }
    }
}

impl TimeOfDay {
    /// All variants, ordered from least to most penalised.
    pub const ALL: [Self; 2] = [Self::WorkingHours, Self::OffHours];

    /// Wire name used by the console and in serialized snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorkingHours => "working-hours",
            Self::OffHours => "off-hours",
        }
    }
}

macro_rules! signal_text_impls {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| CoreError::UnknownSignalValue {
                        field: $field,
                        value: needle.to_owned(),
                    })
            }
        }
    };
}

signal_text_impls!(ActionSpeed, "action_speed");
signal_text_impls!(DeviceContext, "device_context");
signal_text_impls!(TimeOfDay, "time_of_day");

/// The four signals a user can manipulate.
///
/// `stress_level` is expected in `0..=100` but is not validated; the score
/// clamp absorbs anything outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signals {
    /// Self-reported or inferred stress, as a percentage.
    pub stress_level: u32,
    /// Pace of user actions.
    pub action_speed: ActionSpeed,
    /// Origin device classification.
    pub device_context: DeviceContext,
    /// Working hours or not.
    pub time_of_day: TimeOfDay,
}

impl Signals {
    /// Creates a signal set from explicit values.
    #[must_use]
    pub const fn new(
        stress_level: u32,
        action_speed: ActionSpeed,
        device_context: DeviceContext,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self { stress_level, action_speed, device_context, time_of_day }
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::new(
            DEFAULT_STRESS_LEVEL,
            ActionSpeed::Normal,
            DeviceContext::Known,
            TimeOfDay::WorkingHours,
        )
    }
}

/// A single-signal update, as dispatched by the evaluator's setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalChange {
    /// Replace the stress level.
    StressLevel(u32),
    /// Replace the action speed.
    ActionSpeed(ActionSpeed),
    /// Replace the device context.
    DeviceContext(DeviceContext),
    /// Replace the time-of-day bucket.
    TimeOfDay(TimeOfDay),
}

impl SignalChange {
    /// Returns `signals` with this change applied; the other three fields are kept.
    #[must_use]
    pub fn apply_to(self, signals: Signals) -> Signals {
        match self {
            Self::StressLevel(stress_level) => Signals { stress_level, ..signals },
            Self::ActionSpeed(action_speed) => Signals { action_speed, ..signals },
            Self::DeviceContext(device_context) => Signals { device_context, ..signals },
            Self::TimeOfDay(time_of_day) => Signals { time_of_day, ..signals },
        }
    }

    /// Name of the signal this change touches.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::StressLevel(_) => "stress_level",
            Self::ActionSpeed(_) => "action_speed",
            Self::DeviceContext(_) => "device_context",
            Self::TimeOfDay(_) => "time_of_day",
        }
    }
}
