//! Medicine describer: image + filename in, model text out.

use std::sync::Arc;
use std::time::Instant;

use medscribe_core::{
    guess_mime_type, sniff_mime_type, DescriptionRequest, DescriptionResult, Result,
};
use tracing::{debug, error, info, warn};

use crate::prompts::MEDICINE_DESCRIPTION_PROMPT;
use crate::vision::VisionBackend;

/// Describes medicine packages by delegating to a vision backend.
///
/// Cheap to clone; clones share the backend and its HTTP client.
#[derive(Clone)]
pub struct MedicineDescriber {
    backend: Arc<dyn VisionBackend>,
}

impl MedicineDescriber {
    pub fn new(backend: Arc<dyn VisionBackend>) -> Self {
        Self { backend }
    }

    /// Model used by the underlying backend.
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    /// Describe the medicine shown in `image_bytes`.
    ///
    /// The MIME type comes from `filename`'s extension. Bytes are forwarded
    /// as-is, including an empty payload; rejecting empty uploads is the
    /// caller's decision. Upstream failures are returned unchanged and never
    /// retried.
    pub async fn describe(&self, image_bytes: &[u8], filename: &str) -> Result<String> {
        let mime_type = guess_mime_type(filename);

        if let Some(sniffed) = sniff_mime_type(image_bytes) {
            if sniffed != mime_type {
                warn!(
                    filename,
                    mime_type,
                    sniffed,
                    "Filename extension disagrees with image content"
                );
            }
        }

        let start = Instant::now();
        let outcome = self
            .backend
            .describe_image(image_bytes, mime_type, MEDICINE_DESCRIPTION_PROMPT)
            .await;
        let elapsed = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(description) => {
                info!(
                    op = "describe_medicine",
                    model = self.backend.model_name(),
                    mime_type,
                    image_size = image_bytes.len(),
                    response_len = description.len(),
                    duration_ms = elapsed,
                    "Medicine description complete"
                );
                debug!(content = %description, "Raw model response");
                Ok(description)
            }
            Err(e) => {
                error!(
                    op = "describe_medicine",
                    model = self.backend.model_name(),
                    duration_ms = elapsed,
                    error = %e,
                    "Medicine description failed"
                );
                Err(e)
            }
        }
    }

    /// Describe a request, wrapping the text as a [`DescriptionResult`].
    pub async fn describe_request(&self, request: &DescriptionRequest) -> Result<DescriptionResult> {
        self.describe(&request.image, &request.filename)
            .await
            .map(DescriptionResult::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medscribe_core::Error;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct RecordedCall {
        image: Vec<u8>,
        mime_type: String,
        prompt: String,
    }

    /// Backend returning a canned answer and recording its inputs.
    struct RecordingBackend {
        reply: std::result::Result<String, String>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingBackend {
        fn answering(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                reply: Err(msg.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VisionBackend for RecordingBackend {
        async fn describe_image(
            &self,
            image_data: &[u8],
            mime_type: &str,
            prompt: &str,
        ) -> Result<String> {
            self.calls.lock().unwrap().push(RecordedCall {
                image: image_data.to_vec(),
                mime_type: mime_type.to_string(),
                prompt: prompt.to_string(),
            });
            self.reply.clone().map_err(Error::Request)
        }

        fn model_name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_describe_returns_backend_text_verbatim() {
        let backend = Arc::new(RecordingBackend::answering("  Ibuprofen 200 mg\n- NSAID  "));
        let describer = MedicineDescriber::new(backend.clone());

        let text = describer.describe(&[1, 2, 3], "box.png").await.unwrap();
        assert_eq!(text, "  Ibuprofen 200 mg\n- NSAID  ");
    }

    #[tokio::test]
    async fn test_describe_sends_fixed_prompt_and_guessed_mime() {
        let backend = Arc::new(RecordingBackend::answering("ok"));
        let describer = MedicineDescriber::new(backend.clone());

        describer.describe(&[9, 9], "strip.JPEG").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].image, vec![9, 9]);
        assert_eq!(calls[0].mime_type, "image/jpeg");
        assert_eq!(calls[0].prompt, MEDICINE_DESCRIPTION_PROMPT);
    }

    #[tokio::test]
    async fn test_describe_unknown_extension_uses_fallback_mime() {
        let backend = Arc::new(RecordingBackend::answering("ok"));
        let describer = MedicineDescriber::new(backend.clone());

        describer.describe(&[1], "upload").await.unwrap();
        assert_eq!(backend.calls()[0].mime_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_describe_forwards_empty_payload() {
        let backend = Arc::new(RecordingBackend::answering("unable to determine"));
        let describer = MedicineDescriber::new(backend.clone());

        describer.describe(&[], "empty.png").await.unwrap();
        assert!(backend.calls()[0].image.is_empty());
    }

    #[tokio::test]
    async fn test_describe_propagates_backend_error() {
        let backend = Arc::new(RecordingBackend::failing("connection reset"));
        let describer = MedicineDescriber::new(backend.clone());

        let err = describer.describe(&[1], "box.png").await.unwrap_err();
        assert!(matches!(err, Error::Request(_)));
        assert_eq!(backend.calls().len(), 1, "no retries on failure");
    }

    #[tokio::test]
    async fn test_describe_request_wraps_result() {
        let backend = Arc::new(RecordingBackend::answering("Aspirin: pain reliever..."));
        let describer = MedicineDescriber::new(backend);

        let request = DescriptionRequest::new(vec![1, 2], "aspirin.webp");
        let result = describer.describe_request(&request).await.unwrap();
        assert_eq!(result.description, "Aspirin: pain reliever...");
    }
}
