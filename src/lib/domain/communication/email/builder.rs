//! Email builder

use serde_json::{Map, Value};

use crate::domain::communication::{
    attachments::Attachment,
    contacts::Contact,
    content::{Content, HtmlContent, PlainTextContent, TemplateContent},
    tags::Tag,
};

use super::Email;

/// Builds an [`Email`]. Setters can be called in any order and [`EmailBuilder::build`]
/// consumes the builder.
#[derive(Debug, Default)]
#[must_use]
pub struct EmailBuilder {
    email: Email,
}

impl EmailBuilder {
    /// Sets the sender
    pub fn from(mut self, from: Contact) -> Self {
        self.email.from = Some(from);
        self
    }

    /// Adds a recipient
    pub fn append_to(mut self, to: Contact) -> Self {
        self.email.to.push(to);
        self
    }

    /// Adds a carbon copy recipient
    pub fn append_cc(mut self, cc: Contact) -> Self {
        self.email.cc.push(cc);
        self
    }

    /// Adds a blind carbon copy recipient
    pub fn append_bcc(mut self, bcc: Contact) -> Self {
        self.email.bcc.push(bcc);
        self
    }

    /// Sets the subject
    pub fn subject(mut self, subject: &str) -> Self {
        self.email.subject = subject.to_string();
        self
    }

    /// Sets the reply-to contact
    pub fn reply_to(mut self, reply_to: Contact) -> Self {
        self.email.reply_to = Some(reply_to);
        self
    }

    /// Adds an attachment
    pub fn append_attachment(mut self, attachment: impl Into<Attachment>) -> Self {
        self.email.attachments.push(attachment.into());
        self
    }

    /// Adds a tag
    pub fn append_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.email.tags.push(tag.into());
        self
    }

    /// Sets the body, replacing any body set before
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.email.body = Some(content.into());
        self
    }

    /// Starts setting the body
    pub fn body(self) -> BodyBuilder {
        BodyBuilder { parent: self }
    }

    /// Finishes the email
    pub fn build(self) -> Email {
        self.email
    }
}

/// Sets the body of an email, then hands the [`EmailBuilder`] back
#[derive(Debug)]
#[must_use]
pub struct BodyBuilder {
    parent: EmailBuilder,
}

impl BodyBuilder {
    /// Uses an HTML body
    pub fn html(self, html: &str) -> EmailBuilder {
        self.parent.content(HtmlContent::new(html))
    }

    /// Uses a plain text body
    pub fn plain_text(self, text: &str) -> EmailBuilder {
        self.parent.content(PlainTextContent::new(text))
    }

    /// Uses a provider template
    pub fn template(self, id: i64, params: Option<Map<String, Value>>) -> EmailBuilder {
        self.parent.content(TemplateContent::new(id, params))
    }
}
