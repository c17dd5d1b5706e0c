//! Contact

use std::fmt;

use lettre::Address;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// A person who can send or receive an email
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContact")]
pub struct Contact {
    email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawContact {
    email: String,

    #[serde(default)]
    name: Option<String>,
}

impl From<RawContact> for Contact {
    fn from(raw: RawContact) -> Self {
        Self::new(&raw.email, raw.name.as_deref())
    }
}

impl Contact {
    /// Create a new contact. The address is checked by [`Contact::validate`], not here.
    pub fn new(email: &str, name: Option<&str>) -> Self {
        Self {
            email: email.to_string(),
            name: name.filter(|name| !name.is_empty()).map(str::to_string),
        }
    }

    /// Get the contact's email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the contact's display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the contact is the empty contact
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the contact is set and its address parses
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_zero() {
            return Err(ValidationError::EmptyContact);
        }

        self.email.parse::<Address>()?;

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}
