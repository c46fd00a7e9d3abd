//! Classification of OpenRouter error responses.
//!
//! OpenRouter reports failures either as a non-2xx status with an
//! `{"error": {"message", "code"}}` body, or inline in a 200 body when the
//! routed provider fails after the stream has started. Both paths end here.

use medscribe_core::Error;

/// Failure classes OpenRouter distinguishes by status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAIErrorCode {
    /// 401 bad key, 403 key disabled or input flagged by moderation.
    AuthenticationError,
    /// 402: the account balance cannot cover the request.
    InsufficientCredits,
    /// 429: per-key or free-tier request limit hit.
    RateLimitExceeded,
    /// 404: model slug unknown or no provider serves it.
    ModelNotFound,
    /// Image plus prompt exceed the model's context window.
    ContextLengthExceeded,
    /// 5xx: OpenRouter or the routed provider failed (502 down, 503 no endpoint).
    ServerError,
    Unknown,
}

impl OpenAIErrorCode {
    /// Classify by HTTP status, refined by the error `type` when present.
    pub fn from_response(status: u16, error_type: &str) -> Self {
        match (status, error_type) {
            (401 | 403, _) => Self::AuthenticationError,
            (402, _) | (_, "insufficient_quota") => Self::InsufficientCredits,
            (429, _) => Self::RateLimitExceeded,
            (404, _) | (_, "model_not_found") => Self::ModelNotFound,
            (400 | 413, _) if error_type.contains("context_length") => {
                Self::ContextLengthExceeded
            }
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::AuthenticationError => Some("Authentication failed"),
            Self::InsufficientCredits => Some("Insufficient credits"),
            Self::RateLimitExceeded => Some("Rate limit exceeded"),
            Self::ModelNotFound => Some("Model not found"),
            Self::ContextLengthExceeded => Some("Context too long"),
            Self::ServerError => Some("Server error"),
            Self::Unknown => None,
        }
    }
}

/// Every upstream failure is an inference error; the class only prefixes
/// the message.
pub fn to_medscribe_error(code: OpenAIErrorCode, message: &str) -> Error {
    match code.label() {
        Some(label) => Error::Inference(format!("{}: {}", label, message)),
        None => Error::Inference(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_moderation_statuses_are_auth() {
        assert_eq!(
            OpenAIErrorCode::from_response(401, "invalid_api_key"),
            OpenAIErrorCode::AuthenticationError
        );
        assert_eq!(
            OpenAIErrorCode::from_response(403, ""),
            OpenAIErrorCode::AuthenticationError
        );
    }

    #[test]
    fn test_payment_required_is_credits() {
        assert_eq!(
            OpenAIErrorCode::from_response(402, ""),
            OpenAIErrorCode::InsufficientCredits
        );
    }

    #[test]
    fn test_too_many_requests_is_rate_limit() {
        assert_eq!(
            OpenAIErrorCode::from_response(429, ""),
            OpenAIErrorCode::RateLimitExceeded
        );
    }

    #[test]
    fn test_unknown_slug_is_model_not_found() {
        assert_eq!(
            OpenAIErrorCode::from_response(404, ""),
            OpenAIErrorCode::ModelNotFound
        );
        assert_eq!(
            OpenAIErrorCode::from_response(400, "model_not_found"),
            OpenAIErrorCode::ModelNotFound
        );
    }

    #[test]
    fn test_oversized_image_is_context_length() {
        assert_eq!(
            OpenAIErrorCode::from_response(400, "context_length_exceeded"),
            OpenAIErrorCode::ContextLengthExceeded
        );
    }

    #[test]
    fn test_no_available_endpoint_is_server_error() {
        assert_eq!(
            OpenAIErrorCode::from_response(503, ""),
            OpenAIErrorCode::ServerError
        );
        assert_eq!(
            OpenAIErrorCode::from_response(418, ""),
            OpenAIErrorCode::Unknown
        );
    }

    #[test]
    fn test_every_class_is_inference_error() {
        for code in [
            OpenAIErrorCode::AuthenticationError,
            OpenAIErrorCode::ModelNotFound,
            OpenAIErrorCode::RateLimitExceeded,
            OpenAIErrorCode::Unknown,
        ] {
            assert!(matches!(to_medscribe_error(code, "x"), Error::Inference(_)));
        }
    }

    #[test]
    fn test_message_is_prefixed_by_class() {
        let err = to_medscribe_error(OpenAIErrorCode::AuthenticationError, "User not found.");
        assert_eq!(
            err.to_string(),
            "Inference error: Authentication failed: User not found."
        );
        let err = to_medscribe_error(OpenAIErrorCode::Unknown, "teapot");
        assert_eq!(err.to_string(), "Inference error: teapot");
    }
}
