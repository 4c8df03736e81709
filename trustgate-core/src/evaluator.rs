//! The session state machine: signals in, score and modal prompts out.
//!
//! ```text
//!            score < limited            request_elevated_access
//!   Closed ─────────────────> AccessAdjusted ───────────────> Explainability
//!     ^   (any signal setter)        │                              │
//!     │                              │ close_access_modal           │ close_explainability
//!     └──────────────────────────────┴──────────────────────────────┘ (signals reset)
//! ```
//!
//! The access-adjusted trigger is one-way: a score that recovers above the
//! threshold leaves an open prompt open until the user dismisses it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::error::CoreError;
use crate::factors::{contributing_factors, Factor};
use crate::id::SessionId;
use crate::policy::{evaluate_policies, PolicyDecision};
use crate::score::{ReliabilityScore, TrustStatus};
use crate::signals::{ActionSpeed, DeviceContext, SignalChange, Signals, TimeOfDay};
use crate::snapshot::DashboardSnapshot;

/// Which modal prompt, if any, is on screen.
///
/// A single field makes "both open at once" unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalState {
    #[default]
    Closed,
    /// "Access adjusted" prompt offering elevation.
    AccessAdjusted,
    /// Full explanation of the current restriction.
    Explainability,
}

/// Holds one session's signals and UI state and derives everything else.
#[derive(Debug, Clone)]
pub struct TrustEvaluator {
    id: SessionId,
    started_at: DateTime<Utc>,
    config: ScoringConfig,
    signals: Signals,
    is_authenticated: bool,
    user_name: String,
    simulator_mode: bool,
    modal: ModalState,
}

impl Default for TrustEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustEvaluator {
    /// Creates an unauthenticated session with default signals and the
    /// built-in scoring constants.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(ScoringConfig::default())
    }

    /// Creates a session scored with a custom configuration.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidScoringConfig`] if `config` fails validation.
    pub fn with_config(config: ScoringConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: ScoringConfig) -> Self {
        Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            config,
            signals: Signals::default(),
            is_authenticated: false,
            user_name: String::new(),
            simulator_mode: false,
            modal: ModalState::Closed,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    /// Identifier minted when this session was created.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// When this session was created.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Scoring constants this session was created with.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// All four current signals.
    #[must_use]
    pub fn signals(&self) -> Signals {
        self.signals
    }

    /// Current stress reading, `0..=100`.
    #[must_use]
    pub fn stress_level(&self) -> u32 {
        self.signals.stress_level
    }

    /// Current action speed.
    #[must_use]
    pub fn action_speed(&self) -> ActionSpeed {
        self.signals.action_speed
    }

    /// Current device context.
    #[must_use]
    pub fn device_context(&self) -> DeviceContext {
        self.signals.device_context
    }

    /// Current time-of-day bucket.
    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.signals.time_of_day
    }

    /// Recomputed from the current signals on every call.
    #[must_use]
    pub fn reliability_score(&self) -> ReliabilityScore {
        self.config.score(&self.signals)
    }

    /// Classification of the current score.
    #[must_use]
    pub fn trust_status(&self) -> TrustStatus {
        self.config.classify(self.reliability_score())
    }

    /// Whether the current status is [`TrustStatus::Limited`].
    #[must_use]
    pub fn is_access_limited(&self) -> bool {
        self.trust_status() == TrustStatus::Limited
    }

    /// Whether someone is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Name given at login; empty when logged out.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Whether the manual signal controls are shown.
    #[must_use]
    pub fn simulator_mode(&self) -> bool {
        self.simulator_mode
    }

    /// The prompt currently on screen.
    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Whether the access-adjusted prompt is open.
    #[must_use]
    pub fn show_access_modal(&self) -> bool {
        self.modal == ModalState::AccessAdjusted
    }

    /// Whether the explainability prompt is open.
    #[must_use]
    pub fn show_explainability(&self) -> bool {
        self.modal == ModalState::Explainability
    }

    /// Per-signal breakdown of the current score.
    #[must_use]
    pub fn contributing_factors(&self) -> [Factor; 4] {
        contributing_factors(&self.signals)
    }

    /// Outcome of each configured access policy at the current score.
    #[must_use]
    pub fn policy_decisions(&self) -> Vec<PolicyDecision> {
        evaluate_policies(&self.config.policies, self.reliability_score())
    }

    /// Captures every read in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::capture(self)
    }

    /// Guard for views that require a logged-in user.
    ///
    /// # Errors
    /// Returns [`CoreError::NotAuthenticated`] when nobody is logged in.
    pub fn require_authenticated(&self) -> Result<&str, CoreError> {
        if self.is_authenticated {
            Ok(&self.user_name)
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }

    // ── Writes ───────────────────────────────────────────────────────────────

    /// Shows or hides the manual signal controls. Does not affect scoring.
    pub fn set_simulator_mode(&mut self, enabled: bool) {
        self.simulator_mode = enabled;
    }

    /// Values above 100 are kept; the score clamps them.
    pub fn set_stress_level(&mut self, level: u32) {
        self.apply_signal_change(SignalChange::StressLevel(level));
    }

    pub fn set_action_speed(&mut self, speed: ActionSpeed) {
        self.apply_signal_change(SignalChange::ActionSpeed(speed));
    }

    pub fn set_device_context(&mut self, context: DeviceContext) {
        self.apply_signal_change(SignalChange::DeviceContext(context));
    }

    pub fn set_time_of_day(&mut self, time: TimeOfDay) {
        self.apply_signal_change(SignalChange::TimeOfDay(time));
    }

    /// Single entry point for all signal setters.
    ///
    /// Opens the access-adjusted prompt when the new score falls below the
    /// limited threshold and no prompt is already showing. Never closes one.
    fn apply_signal_change(&mut self, change: SignalChange) -> ReliabilityScore {
        self.signals = change.apply_to(self.signals);
        let score = self.reliability_score();
        debug!(session = %self.id, signal = change.field(), score = score.value(), "signal changed");

        if score.value() < self.config.limited_threshold && self.modal == ModalState::Closed {
            self.modal = ModalState::AccessAdjusted;
            info!(
                session = %self.id,
                score = score.value(),
                threshold = self.config.limited_threshold,
                "reliability below threshold, access adjusted"
            );
        }
        score
    }

    /// Marks the session authenticated as `name`, stored verbatim.
    /// Signals are left as they are.
    pub fn login(&mut self, name: &str) {
        self.user_name = name.to_owned();
        self.is_authenticated = true;
        info!(session = %self.id, user = %self.user_name, "logged in");
    }

    /// Clears the user, resets signals and closes any prompt.
    pub fn logout(&mut self) {
        info!(session = %self.id, user = %self.user_name, "logged out");
        self.is_authenticated = false;
        self.user_name.clear();
        self.signals = Signals::default();
        self.modal = ModalState::Closed;
    }

    /// Escalates from the access-adjusted prompt to the explanation.
    ///
    /// Ignored unless the access-adjusted prompt is showing.
    pub fn request_elevated_access(&mut self) {
        if self.modal == ModalState::AccessAdjusted {
            self.modal = ModalState::Explainability;
            info!(session = %self.id, "elevated access requested");
        } else {
            debug!(session = %self.id, modal = ?self.modal, "elevation ignored, no access prompt open");
        }
    }

    /// Dismisses the access-adjusted prompt. The trust status is unaffected.
    pub fn close_access_modal(&mut self) {
        if self.modal == ModalState::AccessAdjusted {
            self.modal = ModalState::Closed;
        }
    }

    /// Opens the explanation directly, replacing an open access prompt.
    pub fn open_explainability(&mut self) {
        self.modal = ModalState::Explainability;
    }

    /// Dismisses the explanation and resets the demo signals to defaults.
    pub fn close_explainability(&mut self) {
        if self.modal == ModalState::Explainability {
            self.modal = ModalState::Closed;
        }
        self.signals = Signals::default();
        debug!(session = %self.id, "explainability closed, signals reset");
    }
}
