/// Errors produced by the `trustgate-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A session accessor was called while no session was mounted.
    #[error("accessor used without an enclosing session")]
    Configuration,

    /// An operation that requires a logged-in user was attempted anonymously.
    #[error("session is not authenticated")]
    NotAuthenticated,

    /// A signal value could not be parsed from its textual form.
    #[error("unknown value '{value}' for signal '{field}'")]
    UnknownSignalValue { field: &'static str, value: String },

    /// A scoring configuration failed validation.
    #[error("invalid scoring config: {reason}")]
    InvalidScoringConfig { reason: String },

    /// A scoring configuration document could not be parsed.
    #[error("scoring config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
