use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Image attached to a complaint, embedded as a self-contained
/// `data:<mime>;base64,<payload>` URI.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    /// Encode raw image bytes as a data URI.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    /// Accept an existing data URI after checking its shape.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        let Some(rest) = uri.strip_prefix("data:") else {
            return Err(Error::InvalidPhoto("missing 'data:' prefix".to_string()));
        };
        let Some((mime, payload)) = rest.split_once(";base64,") else {
            return Err(Error::InvalidPhoto("expected a base64 payload".to_string()));
        };
        if !mime.starts_with("image/") {
            return Err(Error::InvalidPhoto(format!("'{}' is not an image type", mime)));
        }
        if payload.is_empty() {
            return Err(Error::InvalidPhoto("empty payload".to_string()));
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    /// Approximate size of the decoded image in bytes.
    pub fn decoded_len(&self) -> usize {
        let payload = self
            .0
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .unwrap_or("");
        let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
        ((payload.len() / 4) * 3).saturating_sub(padding.min(2))
    }
}

// Data URIs run to megabytes; keep debug output readable.
impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("mime_type", &self.mime_type())
            .field("decoded_len", &self.decoded_len())
            .finish()
    }
}

/// Guess an image MIME type from a file extension.
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// The store writes an empty string when no photo was attached.
pub(crate) fn deserialize_optional_photo<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Photo>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(Photo))
}
