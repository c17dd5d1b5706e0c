//! Email message

mod builder;

use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{
    attachments::Attachment,
    contacts::Contact,
    content::Content,
    errors::ValidationError,
    payload::{self, Envelope, PayloadError},
    tags::Tag,
};

pub use builder::{BodyBuilder, EmailBuilder};

/// An outbound email. Built with [`Email::builder`] and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Email {
    from: Option<Contact>,
    to: Vec<Contact>,
    cc: Vec<Contact>,
    bcc: Vec<Contact>,
    body: Option<Content>,
    subject: String,
    reply_to: Option<Contact>,
    attachments: Vec<Attachment>,
    tags: Vec<Tag>,
}

impl Email {
    /// Starts building a new email
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }

    /// Get the sender
    pub fn from(&self) -> Option<&Contact> {
        self.from.as_ref()
    }

    /// Get the recipients
    pub fn to(&self) -> &[Contact] {
        &self.to
    }

    /// Get the carbon copy recipients
    pub fn cc(&self) -> &[Contact] {
        &self.cc
    }

    /// Get the blind carbon copy recipients
    pub fn bcc(&self) -> &[Contact] {
        &self.bcc
    }

    /// Get the body
    pub fn body(&self) -> Option<&Content> {
        self.body.as_ref()
    }

    /// Get the subject
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Get the reply-to contact
    pub fn reply_to(&self) -> Option<&Contact> {
        self.reply_to.as_ref()
    }

    /// Get the attachments
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Get the tags
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Checks the email can be sent.
    ///
    /// Checks run in a fixed order and the first failure is returned. Template bodies may omit
    /// the sender and the subject because the provider takes them from the template.
    ///
    /// # Returns
    /// - [`Ok`] if the email is valid.
    /// - [`Err`] containing the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_template = self.body.as_ref().is_some_and(Content::is_template);

        if !is_template {
            if self.from.is_none() {
                return Err(ValidationError::FromRequired);
            }

            if self.subject.is_empty() {
                return Err(ValidationError::SubjectRequired);
            }
        }

        if let Some(from) = &self.from {
            from.validate()?;
        }

        if self.to.is_empty() {
            return Err(ValidationError::ToRequired);
        }

        for contact in self.to.iter().chain(&self.cc).chain(&self.bcc) {
            contact.validate()?;
        }

        self.body
            .as_ref()
            .ok_or(ValidationError::BodyRequired)?
            .validate()?;

        self.reply_to
            .as_ref()
            .ok_or(ValidationError::ReplyToRequired)?
            .validate()?;

        for attachment in &self.attachments {
            attachment.validate()?;
        }

        for tag in &self.tags {
            tag.validate()?;
        }

        Ok(())
    }

    /// Builds the flat JSON object sent to the provider
    pub fn to_payload(&self) -> Result<Map<String, Value>, PayloadError> {
        let envelope = Envelope {
            from: self.from.as_ref(),
            to: &self.to,
            cc: &self.cc,
            bcc: &self.bcc,
            subject: &self.subject,
            reply_to: self.reply_to.as_ref(),
            attachments: &self.attachments,
            tags: &self.tags,
        };

        payload::merge(&envelope, self.body.as_ref())
    }

    /// Copies the email with a different set of attachments
    pub(crate) fn with_attachments(&self, attachments: Vec<Attachment>) -> Self {
        Self {
            attachments,
            ..self.clone()
        }
    }
}

impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
