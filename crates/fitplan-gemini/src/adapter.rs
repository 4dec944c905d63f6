use std::sync::Arc;

use fitplan_core::error::{FitplanError, Result};
use reqwest::Client as HttpClient;
use tracing::{error, info};

use crate::client::GeminiClient;

/// Canonical environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Wires the HTTP client [`GeminiClient`] into a value that implements
/// [`fitplan_core::provider::ChatCompletionProvider`].
///
/// The type exposes no request methods of its own; all user-facing
/// functionality sits on [`fitplan_core::FitplanClient`] once the adapter is
/// plugged in.
#[derive(Debug)]
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

impl GeminiAdapter {
    /// Whether a key was configured. Without one every call fails with an
    /// authentication error.
    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`GeminiAdapter`].
///
/// ```rust,no_run
/// use fitplan_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new()
///     .with_api_key(Some("my-key".into()))
///     .build()
///     .expect("HTTP client construction failed");
/// ```
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the API base, e.g. to point at a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder.
    ///
    /// A missing API key is logged and tolerated: the adapter is still built
    /// and reports the problem on its first request.
    ///
    /// # Errors
    ///
    /// * [`FitplanError::BackendUnavailable`] – if the HTTP client cannot be
    ///   constructed (e.g. TLS backend initialisation failed).
    pub fn build(self) -> Result<GeminiAdapter> {
        if self.api_key.is_some() {
            info!("Gemini API key is available");
        } else {
            error!("Gemini API key is not available, set `{API_KEY_ENV}`");
        }

        let http = HttpClient::builder()
            .build()
            .map_err(|err| FitplanError::BackendUnavailable {
                provider: "gemini",
                reason: err.to_string(),
            })?;

        Ok(GeminiAdapter {
            client: Arc::new(GeminiClient::with_http(self.api_key, http, self.base_url)),
        })
    }
}
