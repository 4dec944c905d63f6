use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, error};

use crate::{
    api_v1::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Minimal HTTP client for Gemini’s *generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
/// * A missing API key is only reported when a request is attempted.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn with_http(api_key: Option<String>, http: HttpClient, base_url: Option<String>) -> Self {
        let base = base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self {
            api_key,
            http,
            base,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** `generateContent` call against `model`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let mut key_value = HeaderValue::from_str(api_key).map_err(|_| GeminiError::InvalidApiKey)?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let url = format!("{}/models/{model}:generateContent", self.base);
        debug!(%model, "sending generateContent request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let api_error = ApiErrorEnvelope::parse(&body);
            error!(%status, api_status = ?api_error.status, message = %api_error.message, "Gemini API error");
            return Err(GeminiError::Api {
                status,
                api_status: api_error.status,
                message: api_error.message,
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
