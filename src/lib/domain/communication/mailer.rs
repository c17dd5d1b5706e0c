//! Email service module

mod errors;

use std::num::NonZeroUsize;

use async_trait::async_trait;
use tracing::debug;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{attachments::chunk, email::Email};

pub use errors::{HttpError, MailerError};

/// Email service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `email` - The [`Email`] to send. It is validated before anything is sent.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the provider's message id,
    /// or an [`Err`] containing a [`MailerError`] if the email could not be sent.
    async fn send_email(&self, email: &Email) -> Result<String, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, email: &Email) -> Result<String, MailerError>;
    }
}

/// Sends an email once per group of at most `per_chunk` attachments.
///
/// Every send carries the same envelope and body. An email with no more attachments than
/// `per_chunk` is sent once.
///
/// # Returns
/// A [`Result`] which is [`Ok`] containing the message ids in chunk order,
/// or an [`Err`] with the first [`MailerError`], in which case later chunks are not sent.
pub async fn send_chunked<M: Mailer>(
    mailer: &M,
    email: &Email,
    per_chunk: NonZeroUsize,
) -> Result<Vec<String>, MailerError> {
    email.validate()?;

    if email.attachments().len() <= per_chunk.get() {
        return Ok(vec![mailer.send_email(email).await?]);
    }

    let chunks = chunk(email.attachments(), per_chunk);
    let total = chunks.len();
    let mut message_ids = Vec::with_capacity(total);

    for (index, attachments) in chunks.into_iter().enumerate() {
        debug!(
            chunk = index + 1,
            total,
            attachments = attachments.len(),
            "sending attachment chunk"
        );

        let part = email.with_attachments(attachments);
        message_ids.push(mailer.send_email(&part).await?);
    }

    Ok(message_ids)
}
