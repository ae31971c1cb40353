//! Error type shared by every remote call.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures collapse into one enum so stores can record them as a
//! plain string. The server's `message` wins when present; otherwise callers
//! pick an operation-specific fallback, and transport-level failures always
//! read as [`UNKNOWN_ERROR`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::Envelope;

/// Fallback text for failures that carry no server message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called during server rendering, where the browser session is absent.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from a raw error body, extracting `message` if the
    /// body is the usual JSON envelope.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Envelope>(body)
            .ok()
            .and_then(|env| env.message)
            .filter(|m| !m.trim().is_empty());
        Self::Rejected { status, message }
    }

    /// Text to show the user.
    ///
    /// A rejected call shows the server's message, falling back to
    /// `fallback`. Anything else is reported as an unknown error.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => fallback.to_owned(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => UNKNOWN_ERROR.to_owned(),
        }
    }
}
