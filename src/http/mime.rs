//! MIME type detection based on file extensions.

use std::path::Path;

/// Media type used when an existing resource cannot be classified.
pub const FALLBACK: &str = "application/octet-stream";

/// Guesses the media type of `path` from its extension.
///
/// Returns `None` for unknown or missing extensions; callers decide the
/// fallback.
///
/// # Example
///
/// ```
/// # use tinyhttpd::http::mime::guess_type;
/// assert_eq!(guess_type("index.html"), Some("text/html"));
/// assert_eq!(guess_type("logo.PNG"), Some("image/png"));
/// assert_eq!(guess_type("README"), None);
/// ```
pub fn guess_type(path: impl AsRef<Path>) -> Option<&'static str> {
    let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();

    let mime = match ext.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "txt" | "text" => "text/plain",
        "csv" => "text/csv",
        "xml" => "text/xml",
        "md" => "text/markdown",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => return None,
    };

    Some(mime)
}

/// Whether a body of this media type must be passed through as raw bytes
/// rather than decoded as text.
pub fn is_binary(media_type: &str) -> bool {
    media_type.starts_with("image") || media_type == FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_use_last_extension() {
        assert_eq!(guess_type("assets/css/site.min.css"), Some("text/css"));
        assert_eq!(guess_type("archive.tar.gz"), Some("application/gzip"));
    }

    #[test]
    fn image_family_is_binary() {
        assert!(is_binary("image/png"));
        assert!(is_binary("image/svg+xml"));
        assert!(is_binary(FALLBACK));
        assert!(!is_binary("text/html"));
        assert!(!is_binary("application/json"));
    }
}
