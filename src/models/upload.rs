use crate::error::{Result, StudioError};
use base64::{engine::general_purpose::STANDARD, Engine};

/// A user-supplied source image for edit mode, validated on construction and
/// carried as a data URI so it can ride the wire's `imageUrl` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    mime_type: String,
    data_uri: String,
}

impl UploadedImage {
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self> {
        if !mime_type.starts_with("image/") {
            return Err(StudioError::ValidationError(
                "Please upload an image file".to_string(),
            ));
        }

        let encoded = STANDARD.encode(bytes);
        Ok(Self {
            mime_type: mime_type.to_string(),
            data_uri: format!("data:{};base64,{}", mime_type, encoded),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn as_data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn into_data_uri(self) -> String {
        self.data_uri
    }
}

/// Decode an image reference in data-URI form back into bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = match uri.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => {
            return Err(StudioError::ResponseError(format!(
                "Not a data URI: {}",
                uri
            )))
        }
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| StudioError::ResponseError(format!("Invalid base64 data: {}", e)))
}
