//! Validation errors for outbound emails

use lettre::address::AddressError;
use thiserror::Error;

/// Broad category of a [`ValidationError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A value was present but empty (its zero value)
    EmptyValue,

    /// A value could not be parsed
    InvalidFormat,

    /// A field the message needs was not set
    RequiredFieldMissing,
}

/// Errors raised when validating an email or one of its parts
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The contact has neither an email address nor a name
    #[error("contact is empty")]
    EmptyContact,

    /// The contact's email address could not be parsed
    #[error("contact email address is invalid")]
    InvalidAddress(#[source] AddressError),

    /// The HTML body is empty
    #[error("html content is empty")]
    EmptyHtmlContent,

    /// The plain text body is empty
    #[error("plain text content is empty")]
    EmptyPlainTextContent,

    /// The template id is zero or negative
    #[error("template id is empty")]
    EmptyTemplateId,

    /// The attachment has none of its fields set
    #[error("attachment is empty")]
    EmptyAttachment,

    /// The attachment has no filename
    #[error("attachment filename is empty")]
    EmptyAttachmentFilename,

    /// The attachment has no content
    #[error("attachment content is empty")]
    EmptyAttachmentContent,

    /// The attachment URL could not be parsed
    #[error("attachment url is invalid: {0}")]
    InvalidAttachmentUrl(#[source] url::ParseError),

    /// A tag is empty
    #[error("tag is empty")]
    EmptyTag,

    /// The sender is missing
    #[error("from is required")]
    FromRequired,

    /// There are no recipients
    #[error("at least one recipient is required in to")]
    ToRequired,

    /// The body is missing
    #[error("body is required")]
    BodyRequired,

    /// The reply-to contact is missing
    #[error("reply to is required")]
    ReplyToRequired,

    /// The subject is missing
    #[error("subject is required")]
    SubjectRequired,
}

impl ValidationError {
    /// Gets the category of the error
    pub fn kind(&self) -> ValidationErrorKind {
        use ValidationError::*;

        match self {
            EmptyContact
            | EmptyHtmlContent
            | EmptyPlainTextContent
            | EmptyTemplateId
            | EmptyAttachment
            | EmptyAttachmentFilename
            | EmptyAttachmentContent
            | EmptyTag => ValidationErrorKind::EmptyValue,
            InvalidAddress(_) | InvalidAttachmentUrl(_) => ValidationErrorKind::InvalidFormat,
            FromRequired | ToRequired | BodyRequired | ReplyToRequired | SubjectRequired => {
                ValidationErrorKind::RequiredFieldMissing
            }
        }
    }
}

impl From<AddressError> for ValidationError {
    fn from(err: AddressError) -> Self {
        ValidationError::InvalidAddress(err)
    }
}

impl From<url::ParseError> for ValidationError {
    fn from(err: url::ParseError) -> Self {
        ValidationError::InvalidAttachmentUrl(err)
    }
}
