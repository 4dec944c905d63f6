use fitplan_core::error::{FailureKind, FitplanError};
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode response body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Gemini returned non-success status {status}: {message}")]
    Api {
        status: StatusCode,
        /// Canonical API status, e.g. `RESOURCE_EXHAUSTED`.
        api_status: Option<String>,
        message: String,
    },

    #[error("missing env variable: `GEMINI_API_KEY`")]
    MissingApiKey,

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl GeminiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GeminiError::Http(err) if err.is_decode() => FailureKind::MalformedResponse,
            GeminiError::Http(_) => FailureKind::Network,
            GeminiError::Serde(_) | GeminiError::Format(_) => FailureKind::MalformedResponse,
            GeminiError::MissingApiKey | GeminiError::InvalidApiKey => FailureKind::Auth,
            GeminiError::Api {
                status,
                api_status,
                message,
            } => classify_api_error(*status, api_status.as_deref(), message),
        }
    }
}

fn classify_api_error(status: StatusCode, api_status: Option<&str>, message: &str) -> FailureKind {
    match (status, api_status) {
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _)
        | (_, Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) => FailureKind::Auth,
        (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some("RESOURCE_EXHAUSTED")) => FailureKind::Quota,
        // Gemini reports a rejected key as 400 INVALID_ARGUMENT.
        (StatusCode::BAD_REQUEST, _) if message.contains("API key") => FailureKind::Auth,
        _ => FailureKind::Other,
    }
}

impl From<GeminiError> for FitplanError {
    fn from(value: GeminiError) -> Self {
        let detail = value.to_string();
        match value.kind() {
            FailureKind::Network => FitplanError::Network(detail),
            FailureKind::Auth => FitplanError::Auth(detail),
            FailureKind::Quota => FitplanError::Quota(detail),
            FailureKind::MalformedResponse => FitplanError::MalformedResponse(detail),
            FailureKind::Configuration | FailureKind::Other => FitplanError::Backend(Box::new(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: StatusCode, api_status: Option<&str>, message: &str) -> GeminiError {
        GeminiError::Api {
            status,
            api_status: api_status.map(str::to_owned),
            message: message.to_owned(),
        }
    }

    #[test]
    fn classifies_api_statuses() {
        assert_eq!(api(StatusCode::TOO_MANY_REQUESTS, None, "slow down").kind(), FailureKind::Quota);
        assert_eq!(api(StatusCode::FORBIDDEN, None, "nope").kind(), FailureKind::Auth);
        assert_eq!(
            api(StatusCode::BAD_REQUEST, Some("INVALID_ARGUMENT"), "API key not valid. Please pass a valid API key.")
                .kind(),
            FailureKind::Auth
        );
        assert_eq!(
            api(StatusCode::BAD_REQUEST, Some("INVALID_ARGUMENT"), "contents is not specified").kind(),
            FailureKind::Other
        );
        assert_eq!(
            api(StatusCode::INTERNAL_SERVER_ERROR, None, "boom").kind(),
            FailureKind::Other
        );
    }

    #[test]
    fn converts_into_core_errors() {
        let core: FitplanError = GeminiError::MissingApiKey.into();
        assert_eq!(core.kind(), FailureKind::Auth);
        assert_eq!(
            core.to_string(),
            "authentication failed: missing env variable: `GEMINI_API_KEY`"
        );

        let core: FitplanError = GeminiError::Format("response has no candidates".into()).into();
        assert_eq!(core.kind(), FailureKind::MalformedResponse);

        let core: FitplanError = api(StatusCode::BAD_GATEWAY, None, "upstream").into();
        assert!(matches!(core, FitplanError::Backend(_)));
        assert_eq!(core.kind(), FailureKind::Other);
    }
}
