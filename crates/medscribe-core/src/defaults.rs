//! Centralized default constants for medscribe.
//!
//! All crates reference these constants instead of defining their own magic
//! values. Environment variable names live here too, next to the default they
//! override.

// =============================================================================
// INFERENCE PROVIDER
// =============================================================================

/// Default OpenAI-compatible endpoint (OpenRouter).
pub const INFERENCE_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default multimodal model identifier.
pub const VISION_MODEL: &str = "openai/gpt-5-image-mini";

/// Default outbound request timeout in seconds.
pub const INFERENCE_TIMEOUT_SECS: u64 = 120;

/// Env var holding the inference provider credential.
pub const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

/// Env var holding the secondary provider credential (not used for requests).
pub const ENV_DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";

/// Env var overriding the inference endpoint.
pub const ENV_OPENROUTER_BASE_URL: &str = "OPENROUTER_BASE_URL";

/// Env var overriding the model identifier.
pub const ENV_MODEL: &str = "MEDSCRIBE_MODEL";

/// Env var overriding the outbound timeout.
pub const ENV_TIMEOUT_SECS: &str = "MEDSCRIBE_TIMEOUT_SECS";

/// Env var for the OpenRouter `HTTP-Referer` attribution header.
pub const ENV_HTTP_REFERER: &str = "OPENROUTER_HTTP_REFERER";

/// Env var for the OpenRouter `X-Title` attribution header.
pub const ENV_X_TITLE: &str = "OPENROUTER_X_TITLE";

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Maximum request body size in bytes (20 MiB).
/// Configurable via `MEDSCRIBE_MAX_UPLOAD_BYTES`.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Env var overriding the upload limit.
pub const ENV_MAX_UPLOAD_BYTES: &str = "MEDSCRIBE_MAX_UPLOAD_BYTES";

/// Default tracing filter when `RUST_LOG` is unset.
pub const LOG_FILTER: &str = "medscribe_api=debug,medscribe_inference=debug,tower_http=debug";

// =============================================================================
// MEDIA
// =============================================================================

/// MIME type used when the filename gives no usable hint.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";
