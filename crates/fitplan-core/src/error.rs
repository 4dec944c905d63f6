//! Unified error type exposed by **`fitplan-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the [`FitplanClient`](crate::FitplanClient).
//! Every variant maps onto a coarse [`FailureKind`] so callers can react to
//! the *class* of failure without matching on provider details.

use std::fmt::Display;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FitplanError>;

/// Coarse classification of a failed generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    Network,
    /// The provider rejected the credentials, or none were configured.
    Auth,
    /// Rate limit or quota exhausted.
    Quota,
    /// The provider answered, but not with anything we can turn into text.
    MalformedResponse,
    /// The backend could not be initialised or does not support the request.
    Configuration,
    /// Anything else the provider reported.
    Other,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::Auth => write!(f, "auth"),
            FailureKind::Quota => write!(f, "quota"),
            FailureKind::MalformedResponse => write!(f, "malformed_response"),
            FailureKind::Configuration => write!(f, "configuration"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FitplanError {
    /// The backend failed to initialise at start-up; every later call reports
    /// the original reason.
    #[error("backend `{provider}` is not available: {reason}")]
    BackendUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// The selected backend does not recognise the requested model.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl FitplanError {
    /// Classify the error.
    pub fn kind(&self) -> FailureKind {
        match self {
            FitplanError::BackendUnavailable { .. }
            | FitplanError::ModelNotSupported { .. }
            | FitplanError::InvalidRequest(_) => FailureKind::Configuration,
            FitplanError::Network(_) => FailureKind::Network,
            FitplanError::Auth(_) => FailureKind::Auth,
            FitplanError::Quota(_) => FailureKind::Quota,
            FitplanError::MalformedResponse(_) | FitplanError::Serialization(_) => {
                FailureKind::MalformedResponse
            }
            FitplanError::Backend(_) => FailureKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            FitplanError::Network("reset".into()).kind(),
            FailureKind::Network
        );
        assert_eq!(FitplanError::Quota("429".into()).kind(), FailureKind::Quota);
        assert_eq!(
            FitplanError::BackendUnavailable {
                provider: "gemini",
                reason: "no tls".into()
            }
            .kind(),
            FailureKind::Configuration
        );

        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            FitplanError::from(serde_err).kind(),
            FailureKind::MalformedResponse
        );
    }

    #[test]
    fn display_keeps_detail() {
        let err = FitplanError::Auth("API key not valid".into());
        assert_eq!(err.to_string(), "authentication failed: API key not valid");
    }
}
