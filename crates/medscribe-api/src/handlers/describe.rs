//! Medicine description HTTP handler.
//!
//! Accepts one uploaded image and returns the vision model's description of
//! the medicine it shows.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use medscribe_core::{DescriptionRequest, DescriptionResult};
use utoipa::ToSchema;

use crate::{ApiError, AppState};

/// Multipart field holding the image.
pub const FILE_FIELD: &str = "file";

/// Multipart form accepted by the describe endpoint (OpenAPI only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct MedicineImageUpload {
    /// Photo of the medicine package. The filename extension selects the
    /// MIME type sent to the model.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Describe the medicine shown in an uploaded image.
///
/// # Multipart Fields
/// - `file`: Image file (required). Other fields are ignored.
///
/// # Returns
/// - 200 OK with `{"description": "..."}`
/// - 400 Bad Request if the body is not multipart, `file` is missing, or the file is empty
/// - 413 Payload Too Large if the upload exceeds the configured limit
/// - 502 Bad Gateway if the inference provider fails, rejects the request, or answers with no text
/// - 504 Gateway Timeout if the inference provider does not answer in time
#[utoipa::path(post, path = "/api/medicine_description", tag = "Medicine",
    request_body(content = MedicineImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Medicine described", body = DescriptionResult),
        (status = 400, description = "Missing or empty file", body = crate::error::ErrorBody),
        (status = 413, description = "Upload too large", body = crate::error::ErrorBody),
        (status = 502, description = "Inference provider failed", body = crate::error::ErrorBody),
        (status = 504, description = "Inference provider timed out", body = crate::error::ErrorBody),
    ))]
pub async fn describe_medicine(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DescriptionResult>, ApiError> {
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart).await?;
    upload.validate()?;

    tracing::debug!(
        filename = %upload.filename,
        image_size = upload.image.len(),
        "Received medicine image"
    );

    let result = state.describer.describe_request(&upload).await?;
    Ok(Json(result))
}

/// Read the first `file` field of the form; the filename defaults to "".
async fn read_upload(multipart: &mut Multipart) -> Result<DescriptionRequest, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            return Ok(DescriptionRequest::new(bytes, filename));
        }
    }

    Err(ApiError::BadRequest(format!(
        "Missing '{}' field in multipart form",
        FILE_FIELD
    )))
}
