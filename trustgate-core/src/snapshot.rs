//! Serializable view of everything a dashboard reads from a session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::evaluator::TrustEvaluator;
use crate::factors::Factor;
use crate::id::SessionId;
use crate::policy::PolicyDecision;
use crate::score::{ReliabilityScore, TrustStatus};
use crate::signals::Signals;

/// Point-in-time copy of a [`TrustEvaluator`]'s reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct DashboardSnapshot {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub is_authenticated: bool,
    pub user_name: String,
    pub simulator_mode: bool,
    pub signals: Signals,
    pub reliability_score: ReliabilityScore,
    pub trust_status: TrustStatus,
    pub access_label: &'static str,
    pub is_access_limited: bool,
    pub show_access_modal: bool,
    pub show_explainability: bool,
    pub factors: [Factor; 4],
    pub policies: Vec<PolicyDecision>,
}

impl DashboardSnapshot {
    pub(crate) fn capture(eval: &TrustEvaluator) -> Self {
        let reliability_score = eval.reliability_score();
        let trust_status = eval.config().classify(reliability_score);
        Self {
            session_id: eval.session_id(),
            started_at: eval.started_at(),
            is_authenticated: eval.is_authenticated(),
            user_name: eval.user_name().to_owned(),
            simulator_mode: eval.simulator_mode(),
            signals: eval.signals(),
            reliability_score,
            trust_status,
            access_label: trust_status.access_label(),
            is_access_limited: trust_status == TrustStatus::Limited,
            show_access_modal: eval.show_access_modal(),
            show_explainability: eval.show_explainability(),
            factors: eval.contributing_factors(),
            policies: eval.policy_decisions(),
        }
    }
}
