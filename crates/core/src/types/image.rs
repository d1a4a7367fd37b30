//! Embedded image payloads.
//!
//! Images are not stored in a file/object service; they are embedded
//! directly in records as base64 data URIs (`data:image/jpeg;base64,...`).
//! That makes payload size the scarce resource, so [`ImageData`] exposes
//! the exact decoded byte length for size-cap enforcement.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ImageData`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ImageDataError {
    /// The input does not start with `data:`.
    #[error("image data must be a data URI")]
    MissingDataPrefix,
    /// The input has no `;base64,` marker.
    #[error("image data URI must be base64-encoded")]
    MissingBase64Marker,
    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// A base64-encoded image embedded as a data URI.
///
/// Stored and serialized as the raw data-URI string, so persisted blobs
/// keep the layout the UI hands over from `FileReader.readAsDataURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Encode raw image bytes into a data URI.
    #[must_use]
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
    }

    /// Parse and validate a data-URI string.
    ///
    /// # Errors
    ///
    /// Returns `ImageDataError` if the string is not a base64 data URI or
    /// the payload fails to decode.
    pub fn parse(s: &str) -> Result<Self, ImageDataError> {
        if !s.starts_with("data:") {
            return Err(ImageDataError::MissingDataPrefix);
        }
        let payload = s
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or(ImageDataError::MissingBase64Marker)?;
        BASE64
            .decode(payload)
            .map_err(|e| ImageDataError::InvalidBase64(e.to_string()))?;
        Ok(Self(s.to_owned()))
    }

    /// Decoded payload size in bytes, computed from the encoded length.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        let Some((_, payload)) = self.0.split_once(";base64,") else {
            return 0;
        };
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        // Deserialize admits arbitrary stored strings, so a degenerate
        // payload may carry more padding than its length accounts for.
        ((payload.len() / 4) * 3).saturating_sub(padding)
    }

    /// The full data-URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ImageData` and returns the data-URI string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ImageData {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
