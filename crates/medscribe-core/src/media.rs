//! Media helpers: MIME type guessing, magic byte sniffing, data URIs.
//!
//! The MIME type sent to the inference provider is derived from the filename
//! extension alone. Magic byte sniffing is only used for diagnostics.

use base64::Engine;

use crate::defaults::FALLBACK_MIME_TYPE;

/// Guess a MIME type from a filename's extension.
///
/// Lookup is case-insensitive and only considers the text after the last
/// `.` of the final path component. Dotfiles such as `.png` have no
/// extension. Filenames without an extension, or with an unrecognized one,
/// map to `application/octet-stream`.
pub fn guess_mime_type(filename: &str) -> &'static str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            mime_from_extension(ext).unwrap_or(FALLBACK_MIME_TYPE)
        }
        _ => FALLBACK_MIME_TYPE,
    }
}

/// Map a file extension to its standard MIME type.
fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        // Raster images
        "png" => Some("image/png"),
        "jpg" | "jpeg" | "jpe" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "ico" => Some("image/vnd.microsoft.icon"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "avif" => Some("image/avif"),
        "jxl" => Some("image/jxl"),
        // Vector images
        "svg" => Some("image/svg+xml"),
        // Documents occasionally used for leaflet scans
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "json" => Some("application/json"),
        "html" | "htm" => Some("text/html"),
        "zip" => Some("application/zip"),
        _ => None,
    }
}

/// Detect a MIME type from magic bytes, if the content has a known signature.
pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
    infer::get(data).map(|kind| kind.mime_type())
}

/// Build a `data:<mime>;base64,<payload>` URI for the given bytes.
pub fn data_uri(mime_type: &str, data: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{}", mime_type, encoded)
}
