//! Reliability scoring and access-state machine for the TrustGate dashboard.
//!
//! Four behavioural signals feed an additive penalty model producing a
//! reliability score in `[0, 100]`. The score classifies into a
//! [`TrustStatus`], and a [`TrustEvaluator`] opens the access-adjusted and
//! explainability prompts as the score crosses thresholds.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod factors;
pub mod id;
pub mod policy;
pub mod scope;
pub mod score;
pub mod signals;
pub mod snapshot;

pub use config::ScoringConfig;
pub use error::CoreError;
pub use evaluator::{ModalState, TrustEvaluator};
pub use factors::{contributing_factors, Assessment, Factor, FactorKind};
pub use id::SessionId;
pub use policy::{default_policies, evaluate_policies, AccessPolicy, PolicyDecision, Restriction};
pub use scope::SessionScope;
pub use score::{calculate_reliability_score, classify, ReliabilityScore, TrustStatus, MAX_SCORE};
pub use signals::{ActionSpeed, DeviceContext, SignalChange, Signals, TimeOfDay};
pub use snapshot::DashboardSnapshot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_display_is_hyphenated_uuid() {
        let id = SessionId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36, "hyphenated UUID is 36 chars, got {s}");
        assert!(uuid::Uuid::parse_str(&s).is_ok(), "not a UUID: {s}");
        let json = match serde_json::to_string(&id) {
            Ok(j) => j,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, format!("\"{s}\""), "serializes as the bare display string");
    }

    #[test]
    fn remount_mints_a_new_session_id() {
        let mut scope = SessionScope::new();
        let first = scope.mount().session_id();
        let second = scope.mount().session_id();
        assert_ne!(first, second);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn reliability_score_serializes_as_bare_integer() {
        let json = match serde_json::to_string(&ReliabilityScore::new(42)) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "42");
    }

    #[test]
    fn trust_status_display_matches_wire_name() {
        assert_eq!(TrustStatus::Limited.to_string(), "limited");
        let json = match serde_json::to_string(&TrustStatus::Warning) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn core_error_display_includes_context() {
        let err = CoreError::UnknownSignalValue { field: "device_context", value: "alien".to_owned() };
        let msg = err.to_string();
        assert!(msg.contains("device_context"), "Display must name the field");
        assert!(msg.contains("alien"), "Display must include the value");
    }
}
