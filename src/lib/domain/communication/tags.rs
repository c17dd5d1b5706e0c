//! Tag

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// A label attached to an email for filtering on the provider's side
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a new tag
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Whether the tag is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks the tag is not empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyTag);
        }

        Ok(())
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_empty_tag_is_invalid() {
        assert!(matches!(
            Tag::new("").validate(),
            Err(ValidationError::EmptyTag)
        ));
    }

    #[test]
    fn test_tag_serializes_as_string() -> TestResult {
        let tag = Tag::from("welcome");

        tag.validate()?;

        assert_eq!(serde_json::to_string(&tag)?, r#""welcome""#);
        assert_eq!(tag.to_string(), "welcome");

        Ok(())
    }
}
