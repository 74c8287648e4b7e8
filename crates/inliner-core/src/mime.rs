//! MIME type detection for inlined assets.

/// Fallback when the extension is unknown or missing.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Detect MIME type from a file path's extension.
pub fn mime_for_path(path: &str) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_image_types() {
        assert_eq!(mime_for_path("assets/icon.png"), "image/png");
        assert_eq!(mime_for_path("tex/daisy.webp"), "image/webp");
        assert_eq!(mime_for_path("photo.jpg"), "image/jpeg");
        assert_eq!(mime_for_path("logo.svg"), "image/svg+xml");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(mime_for_path("ICON.PNG"), "image/png");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for_path("blob.zzqx"), DEFAULT_MIME);
    }

    #[test]
    fn test_no_extension_falls_back() {
        assert_eq!(mime_for_path("LICENSE"), DEFAULT_MIME);
        assert_eq!(mime_for_path("dir/"), DEFAULT_MIME);
    }
}
