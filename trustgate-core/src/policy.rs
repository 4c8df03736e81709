//! Adaptive access policies gated on the reliability score.

use serde::{Deserialize, Serialize};

use crate::score::ReliabilityScore;

/// A resource guarded by a minimum reliability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Display name, e.g. `"Sensitive File Downloads"`.
    pub name: String,
    /// Short description of what the policy controls.
    pub description: String,
    /// Minimum score at which access is allowed.
    pub trust_threshold: u8,
}

impl AccessPolicy {
    /// Creates a policy.
    pub fn new(name: impl Into<String>, description: impl Into<String>, trust_threshold: u8) -> Self {
        Self { name: name.into(), description: description.into(), trust_threshold }
    }

    /// Allowed when `score >= trust_threshold`.
    #[must_use]
    pub fn evaluate(&self, score: ReliabilityScore) -> Restriction {
        if score.value() < self.trust_threshold {
            Restriction::Restricted
        } else {
            Restriction::Allowed
        }
    }
}

/// Outcome of evaluating one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Restriction {
    Allowed,
    Restricted,
}

/// A policy paired with its current outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyDecision {
    pub policy: String,
    pub trust_threshold: u8,
    pub restriction: Restriction,
}

/// Evaluates every policy against `score`, preserving order.
#[must_use]
pub fn evaluate_policies(policies: &[AccessPolicy], score: ReliabilityScore) -> Vec<PolicyDecision> {
    policies
        .iter()
        .map(|p| PolicyDecision {
            policy: p.name.clone(),
            trust_threshold: p.trust_threshold,
            restriction: p.evaluate(score),
        })
        .collect()
}

/// The four policies the dashboard ships with.
#[must_use]
pub fn default_policies() -> Vec<AccessPolicy> {
    vec![
        AccessPolicy::new(
            "Sensitive File Downloads",
            "Control access to confidential documents based on trust state",
            80,
        ),
        AccessPolicy::new(
            "External Network Access",
            "Manage access to external resources and cloud services",
            60,
        ),
        AccessPolicy::new(
            "Off-Hours Access",
            "Special authentication for access outside normal working hours",
            70,
        ),
        AccessPolicy::new(
            "New Device Authentication",
            "Additional verification required for unrecognized devices",
            85,
        ),
    ]
}
