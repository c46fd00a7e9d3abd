//! OpenAPI document.

use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::describe::MedicineImageUpload;
use medscribe_core::DescriptionResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medscribe API",
        description = "Describe medicine packages from a photo using a multimodal model"
    ),
    paths(crate::handlers::root::root, crate::handlers::describe::describe_medicine),
    components(schemas(DescriptionResult, ErrorBody, MedicineImageUpload)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Medicine", description = "Medicine description"),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/"]["get"].is_object());
        assert!(doc["paths"]["/api/medicine_description"]["post"].is_object());
        assert!(doc["components"]["schemas"]["DescriptionResult"].is_object());
    }
}
