//! Error types for the Countrydex plugin.
//!
//! This module defines the centralized error type [`CountrydexError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Countrydex plugin operations.
///
/// The two load failures (`Network`, `MalformedResponse`) are the ones the user can
/// see: they put the country list into a failed state from which the fetch can be
/// retried. `Theme` covers custom theme files.
///
/// # Examples
///
/// ```
/// use countrydex::domain::{CountrydexError, FailureKind};
///
/// let error = CountrydexError::Network {
///     status: 503,
///     message: "service unavailable".to_string(),
/// };
/// assert_eq!(error.failure_kind(), Some(FailureKind::Network));
/// ```
#[derive(Debug, Error)]
pub enum CountrydexError {
    /// The request to the countries API did not complete with a 2xx status.
    ///
    /// Zellij reports transport failures (DNS, connectivity) as a non-2xx
    /// result, so both cases end up here.
    #[error("Network error (status {status}): {message}")]
    Network {
        /// HTTP status reported by the host.
        status: u16,
        /// Short description, usually the start of the response body.
        message: String,
    },

    /// The response body is not a JSON array of country records.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// Category of a failed country load, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The fetch did not complete successfully.
    Network,
    /// The fetch completed but the payload could not be decoded.
    MalformedResponse,
}

impl CountrydexError {
    /// Returns the load failure category, or `None` for errors unrelated to fetching.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Network { .. } => Some(FailureKind::Network),
            Self::MalformedResponse(_) => Some(FailureKind::MalformedResponse),
            Self::Theme(_) => None,
        }
    }
}

/// A specialized `Result` type for Countrydex operations.
pub type Result<T> = std::result::Result<T, CountrydexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_converts_with_question_mark() {
        fn parse() -> Result<Vec<u8>> {
            Ok(serde_json::from_str("not json")?)
        }

        let err = parse().unwrap_err();
        assert_eq!(err.failure_kind(), Some(FailureKind::MalformedResponse));
        assert!(err.to_string().starts_with("Malformed response"));
    }

    #[test]
    fn theme_errors_have_no_failure_kind() {
        let err = CountrydexError::Theme("bad".into());
        assert_eq!(err.failure_kind(), None);
        assert_eq!(err.to_string(), "Theme error: bad");
    }
}
