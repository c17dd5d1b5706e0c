//! Mailer errors

use serde::Deserialize;
use thiserror::Error;

use crate::domain::communication::{errors::ValidationError, payload::PayloadError};

/// Error returned by the provider when it refuses a message
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct HttpError {
    /// The HTTP status code of the response
    #[serde(skip)]
    pub status: u16,

    /// The provider's error code
    #[serde(default)]
    pub code: String,

    /// The provider's error message
    #[serde(default)]
    pub message: String,
}

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The email failed validation and was not sent
    #[error("invalid email: {0}")]
    Validation(#[from] ValidationError),

    /// The email could not be turned into a request payload
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The provider answered with an error
    #[error("the provider refused the email ({0})")]
    Http(HttpError),

    /// The request could not be sent or its response could not be read
    #[error("request to the provider failed")]
    Transport(#[from] reqwest::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<HttpError> for MailerError {
    fn from(err: HttpError) -> Self {
        MailerError::Http(err)
    }
}
