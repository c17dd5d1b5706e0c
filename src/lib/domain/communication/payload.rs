//! Wire payload for the provider's send endpoint
//!
//! The provider expects the body fields (`htmlContent`, `templateId`, ...) as siblings of the
//! envelope fields, so the envelope and the body are serialized separately and their fields
//! are concatenated into a single object.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use super::{attachments::Attachment, contacts::Contact, tags::Tag};

/// Errors that can occur when building the wire payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A part of the email could not be encoded
    #[error("could not encode email payload")]
    Encode(#[from] serde_json::Error),

    /// A part did not encode to a JSON object
    #[error("{0} did not encode to a JSON object")]
    NotAnObject(&'static str),

    /// The body produced a field the envelope already has
    #[error("body field \"{0}\" collides with an envelope field")]
    FieldCollision(String),
}

/// Routing and metadata fields of an email
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<'a> {
    #[serde(rename = "sender", skip_serializing_if = "Option::is_none")]
    pub from: Option<&'a Contact>,

    pub to: &'a [Contact],

    #[serde(skip_serializing_if = "is_empty")]
    pub cc: &'a [Contact],

    #[serde(skip_serializing_if = "is_empty")]
    pub bcc: &'a [Contact],

    #[serde(skip_serializing_if = "is_blank")]
    pub subject: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<&'a Contact>,

    #[serde(rename = "attachment", skip_serializing_if = "is_empty")]
    pub attachments: &'a [Attachment],

    #[serde(skip_serializing_if = "is_empty")]
    pub tags: &'a [Tag],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

/// Builds the flat payload: envelope fields first, then the body's fields.
pub(crate) fn merge<B: Serialize>(
    envelope: &Envelope<'_>,
    body: Option<&B>,
) -> Result<Map<String, Value>, PayloadError> {
    let mut payload = to_object(envelope, "envelope")?;

    let Some(body) = body else {
        return Ok(payload);
    };

    for (key, value) in to_object(body, "body")? {
        if payload.contains_key(&key) {
            warn!(field = %key, "body field collides with envelope field");

            return Err(PayloadError::FieldCollision(key));
        }

        payload.insert(key, value);
    }

    Ok(payload)
}

fn to_object<T: Serialize>(
    part: &T,
    name: &'static str,
) -> Result<Map<String, Value>, PayloadError> {
    match serde_json::to_value(part)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(PayloadError::NotAnObject(name)),
    }
}
