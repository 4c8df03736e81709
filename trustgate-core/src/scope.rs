//! Explicit owner of the current session.
//!
//! Views receive a `&SessionScope` or `&mut SessionScope` instead of reaching
//! for ambient state. Using an accessor while nothing is mounted is a
//! programming error and surfaces as [`CoreError::Configuration`].

use tracing::debug;

use crate::config::ScoringConfig;
use crate::error::CoreError;
use crate::evaluator::TrustEvaluator;

/// Holds at most one [`TrustEvaluator`].
#[derive(Debug, Default)]
pub struct SessionScope {
    config: ScoringConfig,
    session: Option<TrustEvaluator>,
}

impl SessionScope {
    /// Creates an empty scope whose sessions use the built-in constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose sessions use `config`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidScoringConfig`] if `config` fails validation.
    pub fn with_config(config: ScoringConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config, session: None })
    }

    /// Creates a fresh session, replacing any existing one.
    pub fn mount(&mut self) -> &mut TrustEvaluator {
        let session = TrustEvaluator::from_validated(self.config.clone());
        debug!(session = %session.session_id(), "session mounted");
        self.session.insert(session)
    }

    /// Destroys the current session, returning it if one existed.
    pub fn unmount(&mut self) -> Option<TrustEvaluator> {
        let session = self.session.take();
        if let Some(s) = &session {
            debug!(session = %s.session_id(), "session unmounted");
        }
        session
    }

    /// Whether a session currently exists.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    /// Borrows the mounted session.
    ///
    /// # Errors
    /// Returns [`CoreError::Configuration`] if no session is mounted.
    pub fn session(&self) -> Result<&TrustEvaluator, CoreError> {
        self.session.as_ref().ok_or(CoreError::Configuration)
    }

    /// Mutably borrows the mounted session.
    ///
    /// # Errors
    /// Returns [`CoreError::Configuration`] if no session is mounted.
    pub fn session_mut(&mut self) -> Result<&mut TrustEvaluator, CoreError> {
        self.session.as_mut().ok_or(CoreError::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_without_session_is_configuration_error() {
        let mut scope = SessionScope::new();
        assert!(matches!(scope.session(), Err(CoreError::Configuration)));
        assert!(matches!(scope.session_mut(), Err(CoreError::Configuration)));
        let msg = CoreError::Configuration.to_string();
        assert_eq!(msg, "accessor used without an enclosing session");
    }

    #[test]
    fn mount_and_unmount_lifecycle() {
        let mut scope = SessionScope::new();
        let id = scope.mount().session_id();
        assert!(scope.is_mounted());
        match scope.session() {
            Ok(s) => assert_eq!(s.session_id(), id),
            Err(e) => panic!("unexpected error: {e}"),
        }
        let removed = scope.unmount();
        assert_eq!(removed.map(|s| s.session_id()), Some(id));
        assert!(!scope.is_mounted());
        assert!(scope.unmount().is_none(), "second unmount finds nothing");
    }

    #[test]
    fn remount_starts_a_new_session() {
        let mut scope = SessionScope::new();
        let first = scope.mount().session_id();
        let second = scope.mount().session_id();
        assert_ne!(first, second);
    }

    #[test]
    fn scope_config_reaches_mounted_sessions() {
        let config = ScoringConfig { off_hours_penalty: 0, ..ScoringConfig::default() };
        let mut scope = match SessionScope::with_config(config) {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let session = scope.mount();
        session.set_time_of_day(crate::TimeOfDay::OffHours);
        assert_eq!(session.reliability_score().value(), 96);
    }
}
