//! Errors returned by a site check.

use thiserror::Error;

/// Failure of a single status check.
///
/// Both kinds are terminal for the invocation; the caller decides how to
/// report them and what exit code to use.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input could not be turned into an HTTP(S) scheme and a host.
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The request did not complete (DNS, connect, TLS, timeout, protocol).
    #[error("GET {target} failed")]
    Network {
        target: String,
        #[source]
        source: curl::Error,
    },

    /// The transfer ended without the server sending a status line.
    #[error("GET {target} failed: no HTTP status line received")]
    NoStatusLine { target: String },
}

impl CheckError {
    pub(crate) fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        CheckError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn network(target: &str, source: curl::Error) -> Self {
        CheckError::Network {
            target: target.to_string(),
            source,
        }
    }

    /// True for failures that happened after a request was attempted.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            CheckError::Network { .. } | CheckError::NoStatusLine { .. }
        )
    }
}
