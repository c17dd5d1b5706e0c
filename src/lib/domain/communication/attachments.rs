//! Email attachments

use std::num::NonZeroUsize;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Serialize, Serializer};
use url::Url;

use super::errors::ValidationError;

/// A file sent inline with the message. The payload is base64-encoded when serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContentAttachment {
    #[serde(serialize_with = "as_base64")]
    content: Vec<u8>,

    #[serde(rename = "name")]
    filename: String,
}

fn as_base64<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(content))
}

impl ContentAttachment {
    /// Create a new inline attachment
    pub fn new(filename: &str, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            filename: filename.to_string(),
        }
    }

    /// Get the filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the raw content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the content encoded as standard base64
    pub fn base64_content(&self) -> String {
        STANDARD.encode(&self.content)
    }

    /// Whether the attachment is empty
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks both the filename and the content are set
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_zero() {
            return Err(ValidationError::EmptyAttachment);
        }

        if self.filename.is_empty() {
            return Err(ValidationError::EmptyAttachmentFilename);
        }

        if self.content.is_empty() {
            return Err(ValidationError::EmptyAttachmentContent);
        }

        Ok(())
    }
}

/// A file the provider downloads from a URL
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UrlAttachment {
    url: String,

    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
}

impl UrlAttachment {
    /// Create a new URL attachment
    pub fn new(url: &str, filename: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            filename: filename.filter(|name| !name.is_empty()).map(str::to_string),
        }
    }

    /// Get the URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the filename, if one was given
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Whether the attachment is empty
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the URL is an absolute URI
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_zero() {
            return Err(ValidationError::EmptyAttachment);
        }

        Url::parse(&self.url)?;

        Ok(())
    }
}

/// An email attachment
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attachment {
    /// Inline content
    Content(ContentAttachment),

    /// Remote file
    Url(UrlAttachment),
}

impl Attachment {
    /// Whether the active variant is empty
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Content(attachment) => attachment.is_zero(),
            Self::Url(attachment) => attachment.is_zero(),
        }
    }

    /// Validates the active variant
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Content(attachment) => attachment.validate(),
            Self::Url(attachment) => attachment.validate(),
        }
    }
}

impl From<ContentAttachment> for Attachment {
    fn from(attachment: ContentAttachment) -> Self {
        Self::Content(attachment)
    }
}

impl From<UrlAttachment> for Attachment {
    fn from(attachment: UrlAttachment) -> Self {
        Self::Url(attachment)
    }
}

/// Splits `items` into consecutive groups of at most `size` elements, keeping their order.
pub fn chunk<T: Clone>(items: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(size.get()).map(<[T]>::to_vec).collect()
}
