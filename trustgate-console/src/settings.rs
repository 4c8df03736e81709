//! Scoring configuration lookup for the console binary.

use std::path::Path;

use trustgate_core::ScoringConfig;

use crate::error::ConsoleError;

/// Environment variable naming a JSON [`ScoringConfig`] file.
pub const CONFIG_ENV: &str = "TRUSTGATE_CONFIG";

/// Loads the scoring config from `path`, or the built-in defaults when `None`.
///
/// # Errors
/// Returns [`ConsoleError::Io`] if the file cannot be read and
/// [`ConsoleError::Core`] if it does not parse or validate.
pub fn load_scoring_config(path: Option<&Path>) -> Result<ScoringConfig, ConsoleError> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config = ScoringConfig::from_json_str(&text)?;
    tracing::info!(path = %path.display(), "loaded scoring config");
    Ok(config)
}
