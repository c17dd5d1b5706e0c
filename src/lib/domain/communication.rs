//! Outbound email messages and the contract for sending them.

pub mod attachments;
pub mod contacts;
pub mod content;
pub mod email;
pub mod errors;
pub mod mailer;
pub mod payload;
pub mod tags;

pub use attachments::{chunk, Attachment, ContentAttachment, UrlAttachment};
pub use contacts::Contact;
pub use content::{Content, ContentKind, HtmlContent, PlainTextContent, TemplateContent};
pub use email::{BodyBuilder, Email, EmailBuilder};
pub use errors::{ValidationError, ValidationErrorKind};
pub use mailer::{send_chunked, HttpError, Mailer, MailerError};
pub use payload::PayloadError;
pub use tags::Tag;
