//! `data:` URLs with a base64 payload.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::DataUrlError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A file's bytes tagged with their MIME type.
///
/// Renders as `data:<mime>;base64,<payload>` with the standard alphabet,
/// padding included and no line wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    data: Vec<u8>,
}

impl DataUrl {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parse a base64 data URL back into MIME type and bytes.
    pub fn parse(s: &str) -> Result<Self, DataUrlError> {
        let rest = s.strip_prefix(SCHEME).ok_or(DataUrlError::MissingScheme)?;
        let (mime, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(DataUrlError::NotBase64)?;
        let data = STANDARD
            .decode(payload)
            .map_err(|e| DataUrlError::InvalidPayload(e.to_string()))?;
        Ok(Self::new(mime, data))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SCHEME}{}{BASE64_MARKER}{}",
            self.mime,
            STANDARD.encode(&self.data)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_header() {
        let url = DataUrl::new("image/png", vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(url.to_string(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_padding_kept() {
        let url = DataUrl::new("text/plain", b"a".to_vec());
        assert_eq!(url.to_string(), "data:text/plain;base64,YQ==");
    }

    #[test]
    fn test_empty_payload() {
        let url = DataUrl::new("application/octet-stream", Vec::new());
        assert_eq!(url.to_string(), "data:application/octet-stream;base64,");
        assert_eq!(DataUrl::parse(&url.to_string()).unwrap(), url);
    }

    #[test]
    fn test_no_line_wrapping() {
        let url = DataUrl::new("application/octet-stream", vec![0xAB; 4096]).to_string();
        assert!(!url.contains('\n'));
        assert!(!url.contains('\r'));
    }

    #[test]
    fn test_parse_recovers_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let rendered = DataUrl::new("image/webp", bytes.clone()).to_string();
        let parsed = DataUrl::parse(&rendered).unwrap();
        assert_eq!(parsed.mime(), "image/webp");
        assert_eq!(parsed.data(), bytes.as_slice());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DataUrl::parse("http://example.com/a.png"),
            Err(DataUrlError::MissingScheme)
        );
        assert_eq!(
            DataUrl::parse("data:text/plain,hello"),
            Err(DataUrlError::NotBase64)
        );
        assert!(matches!(
            DataUrl::parse("data:text/plain;base64,***"),
            Err(DataUrlError::InvalidPayload(_))
        ));
    }
}
