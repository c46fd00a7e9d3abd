//! Liveness placeholder.

/// Always `200 OK` with an empty body.
#[utoipa::path(get, path = "/", tag = "Health",
    responses((status = 200, description = "Empty body")))]
pub async fn root() -> &'static str {
    ""
}
