//! OpenAI-compatible vision backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use medscribe_core::defaults::{
    ENV_HTTP_REFERER, ENV_MODEL, ENV_OPENROUTER_BASE_URL, ENV_TIMEOUT_SECS, ENV_X_TITLE,
    INFERENCE_BASE_URL, INFERENCE_TIMEOUT_SECS, VISION_MODEL,
};
use medscribe_core::{data_uri, non_empty_var, Error, ProviderCredentials, Result};

use super::error::{to_medscribe_error, OpenAIErrorCode};
use super::types::*;
use crate::vision::VisionBackend;

/// Configuration for the OpenAI-compatible vision backend.
#[derive(Clone)]
pub struct VisionConfig {
    /// Base URL for the API endpoint (without `/chat/completions`).
    pub base_url: String,
    /// Bearer credential; omitted from requests when `None`.
    pub api_key: Option<String>,
    /// Multimodal model identifier.
    pub model: String,
    /// Request timeout in seconds, covering connect through body read.
    pub timeout_seconds: u64,
    /// HTTP-Referer header for OpenRouter.ai rankings (optional).
    pub http_referer: Option<String>,
    /// X-Title header for app name on OpenRouter.ai (optional).
    pub x_title: Option<String>,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            base_url: INFERENCE_BASE_URL.to_string(),
            api_key: None,
            model: VISION_MODEL.to_string(),
            timeout_seconds: INFERENCE_TIMEOUT_SECS,
            http_referer: None,
            x_title: None,
        }
    }
}

impl VisionConfig {
    /// Build from environment variables, taking the key from `credentials`.
    ///
    /// Blank values fall back to the defaults.
    pub fn from_env(credentials: &ProviderCredentials) -> Self {
        Self {
            base_url: non_empty_var(ENV_OPENROUTER_BASE_URL)
                .unwrap_or_else(|| INFERENCE_BASE_URL.to_string()),
            api_key: credentials.openrouter_api_key.clone(),
            model: non_empty_var(ENV_MODEL).unwrap_or_else(|| VISION_MODEL.to_string()),
            timeout_seconds: non_empty_var(ENV_TIMEOUT_SECS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(INFERENCE_TIMEOUT_SECS),
            http_referer: non_empty_var(ENV_HTTP_REFERER),
            x_title: non_empty_var(ENV_X_TITLE),
        }
    }
}

impl std::fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("http_referer", &self.http_referer)
            .field("x_title", &self.x_title)
            .finish()
    }
}

/// Vision backend speaking the OpenAI chat-completions protocol.
///
/// Owns one `reqwest::Client` for the lifetime of the process so that
/// connections are pooled across requests.
pub struct OpenAIVisionBackend {
    client: Client,
    config: VisionConfig,
}

impl OpenAIVisionBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: VisionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            timeout_secs = config.timeout_seconds,
            "Initializing vision backend"
        );

        Ok(Self { client, config })
    }

    /// Build a request with authentication if configured.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        // OpenRouter attribution headers
        if let Some(ref referer) = self.config.http_referer {
            req = req.header("HTTP-Referer", referer);
        }

        if let Some(ref title) = self.config.x_title {
            req = req.header("X-Title", title);
        }

        req
    }
}

/// Turn a non-success upstream response body into a medscribe Error.
fn upstream_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<OpenAIErrorResponse>(body) {
        Ok(parsed) => {
            let error_type = parsed.error.error_type.as_deref().unwrap_or("");
            let code = OpenAIErrorCode::from_response(status, error_type);
            to_medscribe_error(code, &format!("{} ({})", parsed.error.message, status))
        }
        Err(_) => {
            let code = OpenAIErrorCode::from_response(status, "");
            let snippet: String = body.chars().take(200).collect();
            to_medscribe_error(code, &format!("provider returned {}: {}", status, snippet))
        }
    }
}

/// Pull the first choice's text out of a completion response.
fn first_choice_text(response: ChatCompletionResponse) -> Result<String> {
    if let Some(err) = response.error {
        let status = err
            .code
            .as_ref()
            .and_then(|c| c.as_u64())
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(500);
        let error_type = err.error_type.as_deref().unwrap_or("");
        let code = OpenAIErrorCode::from_response(status, error_type);
        return Err(to_medscribe_error(code, &err.message));
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::Inference("Response contained no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| Error::Inference("First choice has no text content".to_string()))
}

#[async_trait]
impl VisionBackend for OpenAIVisionBackend {
    async fn describe_image(
        &self,
        image_data: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String> {
        let start = Instant::now();
        let image_url = data_uri(mime_type, image_data);

        debug!(
            model = %self.config.model,
            mime_type,
            image_size = image_data.len(),
            data_uri_len = image_url.len(),
            "Sending image to vision model"
        );

        let request = VisionChatRequest {
            model: self.config.model.clone(),
            messages: vec![VisionMessage::user_with_image(prompt, image_url)],
        };

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                upstream_status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Vision provider returned an error status"
            );
            return Err(upstream_error(status.as_u16(), &body));
        }

        let result: ChatCompletionResponse = response.json().await?;
        if let Some(ref usage) = result.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Vision token usage"
            );
        }

        first_choice_text(result)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
