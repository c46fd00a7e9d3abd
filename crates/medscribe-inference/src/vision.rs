//! Vision backend trait for image description.

use async_trait::async_trait;
use medscribe_core::Result;

/// Backend for describing images using vision LLMs.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Describe an image with the given instruction.
    ///
    /// Returns the model's text verbatim.
    async fn describe_image(
        &self,
        image_data: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
