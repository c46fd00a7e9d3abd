//! Request and result types shared between the endpoint and the describer.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::media::guess_mime_type;

/// An uploaded image awaiting description.
///
/// Lives for a single HTTP request and is never persisted.
#[derive(Debug, Clone)]
pub struct DescriptionRequest {
    /// Raw bytes of the uploaded file, shared with the multipart buffer.
    pub image: Bytes,
    /// Client-supplied filename, used only to guess the MIME type.
    pub filename: String,
}

impl DescriptionRequest {
    pub fn new(image: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            filename: filename.into(),
        }
    }

    /// MIME type derived from the filename extension.
    pub fn mime_type(&self) -> &'static str {
        guess_mime_type(&self.filename)
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    /// Reject uploads that carry no image data.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidInput("Uploaded file is empty".to_string()));
        }
        Ok(())
    }
}

/// Description returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DescriptionResult {
    /// Model-generated description of the medicine, returned verbatim.
    #[schema(example = "Aspirin: pain reliever...")]
    pub description: String,
}

impl From<String> for DescriptionResult {
    fn from(description: String) -> Self {
        Self { description }
    }
}
