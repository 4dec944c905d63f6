use serde::{Deserialize, Serialize};

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i64,
    #[serde(default)]
    pub candidates_token_count: i64,
    #[serde(default)]
    pub total_token_count: i64,
}

/// Body of a non-success response: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `RESOURCE_EXHAUSTED` or `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorEnvelope {
    /// Parse an error body, falling back to the raw text when it isn't JSON.
    pub fn parse(body: &str) -> ApiErrorBody {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_else(|_| ApiErrorBody {
                code: None,
                message: body.trim().to_owned(),
                status: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_error() {
        let body = ApiErrorEnvelope::parse(
            r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert_eq!(body.code, Some(429));
        assert_eq!(body.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
        assert_eq!(body.message, "Resource has been exhausted");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let body = ApiErrorEnvelope::parse("  upstream timeout \n");
        assert_eq!(body.message, "upstream timeout");
        assert!(body.status.is_none());
    }
}
