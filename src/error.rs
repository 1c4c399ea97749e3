//! Error taxonomy for the redirect gate.
//!
//! ERROR HANDLING
//! ==============
//! None of these ever reach the user. Transport and body failures feed the
//! retry loop; config failures make the browser entry fall back to defaults.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The status request never produced an HTTP response.
    #[error("status request failed: {0}")]
    Transport(String),

    /// A 200 response whose body is not a valid status object.
    #[error("status body parse failed: {0}")]
    BodyParse(String),

    /// `location.replace` threw.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// No browsing context (`window`/`document`) is available.
    #[error("browser context unavailable")]
    Unavailable,
}

impl GateError {
    /// Whether the retry loop should keep polling after this failure.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::BodyParse(_) | Self::Navigation(_))
    }
}
