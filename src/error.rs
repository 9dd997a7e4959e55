//! Error type shared by the widget

use thiserror::Error;

/// Errors surfaced by configuration, balance input and renderer setup.
///
/// Everything else in the widget degrades silently (e.g. a spin request
/// while a spin is running is simply dropped).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Unknown locale code, incomplete locale table or malformed config
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Negative or malformed balance/reward input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Render surface could not be created (fatal for the session)
    #[error("initialization error: {0}")]
    Initialization(String),
}

impl From<serde_json::Error> for WheelError {
    fn from(e: serde_json::Error) -> Self {
        WheelError::Configuration(e.to_string())
    }
}
