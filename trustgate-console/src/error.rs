//! Error types for the console crate.

use trustgate_core::CoreError;

/// Errors that can occur while reading and dispatching console commands.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConsoleError {
    /// An error propagated from the core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The input line is not a recognised command.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Reading input, writing output or loading config failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A snapshot could not be serialized.
    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Whether the console loop must stop.
    ///
    /// Bad user input is reported and skipped. A missing session, broken
    /// I/O or invalid config ends the run.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            ConsoleError::InvalidCommand(_)
            | ConsoleError::Core(CoreError::UnknownSignalValue { .. } | CoreError::NotAuthenticated) => false,
            ConsoleError::Core(_) | ConsoleError::Io(_) | ConsoleError::Json(_) => true,
        }
    }
}
