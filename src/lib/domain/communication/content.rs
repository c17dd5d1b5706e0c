//! Email body content

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ValidationError;

/// The kind of body an email carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Inline HTML
    Html,

    /// Inline plain text
    PlainText,

    /// A template stored on the provider's side
    Template,
}

/// HTML body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HtmlContent {
    #[serde(rename = "htmlContent")]
    html: String,
}

impl HtmlContent {
    /// Create a new HTML body
    pub fn new(html: &str) -> Self {
        Self {
            html: html.to_string(),
        }
    }

    /// Get the HTML
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the body is empty
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the HTML is not empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.html.is_empty() {
            return Err(ValidationError::EmptyHtmlContent);
        }

        Ok(())
    }
}

/// Plain text body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlainTextContent {
    #[serde(rename = "textContent")]
    text: String,
}

impl PlainTextContent {
    /// Create a new plain text body
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Get the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the body is empty
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the text is not empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::EmptyPlainTextContent);
        }

        Ok(())
    }
}

/// Body rendered by the provider from one of its stored templates
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TemplateContent {
    #[serde(rename = "templateId")]
    id: i64,

    #[serde(skip_serializing_if = "no_params")]
    params: Option<Map<String, Value>>,
}

fn no_params(params: &Option<Map<String, Value>>) -> bool {
    params.as_ref().map_or(true, Map::is_empty)
}

impl TemplateContent {
    /// Create a new template body
    ///
    /// # Arguments
    /// * `id` - The provider's template id.
    /// * `params` - Values substituted into the template, passed through as is.
    pub fn new(id: i64, params: Option<Map<String, Value>>) -> Self {
        Self { id, params }
    }

    /// Get the template id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the template parameters
    pub fn params(&self) -> Option<&Map<String, Value>> {
        self.params.as_ref()
    }

    /// Whether the body is empty
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the template id is positive
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::EmptyTemplateId);
        }

        Ok(())
    }
}

/// The body of an email. Serializes to the flat fields of the active variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// HTML body
    Html(HtmlContent),

    /// Plain text body
    PlainText(PlainTextContent),

    /// Template body
    Template(TemplateContent),
}

impl Content {
    /// Gets the kind of the active variant
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Html(_) => ContentKind::Html,
            Self::PlainText(_) => ContentKind::PlainText,
            Self::Template(_) => ContentKind::Template,
        }
    }

    /// Whether the body is a provider template
    pub fn is_template(&self) -> bool {
        self.kind() == ContentKind::Template
    }

    /// Whether the active variant is empty
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Html(content) => content.is_zero(),
            Self::PlainText(content) => content.is_zero(),
            Self::Template(content) => content.is_zero(),
        }
    }

    /// Validates the active variant
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Html(content) => content.validate(),
            Self::PlainText(content) => content.validate(),
            Self::Template(content) => content.validate(),
        }
    }
}

impl From<HtmlContent> for Content {
    fn from(content: HtmlContent) -> Self {
        Self::Html(content)
    }
}

impl From<PlainTextContent> for Content {
    fn from(content: PlainTextContent) -> Self {
        Self::PlainText(content)
    }
}

impl From<TemplateContent> for Content {
    fn from(content: TemplateContent) -> Self {
        Self::Template(content)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_empty_html_is_invalid() {
        let content = Content::from(HtmlContent::new(""));

        assert!(content.is_zero());
        assert!(matches!(
            content.validate(),
            Err(ValidationError::EmptyHtmlContent)
        ));
    }

    #[test]
    fn test_empty_plain_text_is_invalid() {
        let content = Content::from(PlainTextContent::new(""));

        assert!(content.is_zero());
        assert!(matches!(
            content.validate(),
            Err(ValidationError::EmptyPlainTextContent)
        ));
    }

    #[test]
    fn test_template_id_must_be_positive() {
        for id in [0, -1] {
            assert!(matches!(
                TemplateContent::new(id, None).validate(),
                Err(ValidationError::EmptyTemplateId)
            ));
        }
    }

    #[test]
    fn test_template_with_params_is_not_zero() {
        let mut params = Map::new();
        params.insert("name".to_string(), json!("John"));

        assert!(TemplateContent::new(0, None).is_zero());
        assert!(!TemplateContent::new(0, Some(params)).is_zero());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Content::from(HtmlContent::new("<p>hi</p>")).kind(), ContentKind::Html);
        assert_eq!(
            Content::from(PlainTextContent::new("hi")).kind(),
            ContentKind::PlainText
        );
        assert!(Content::from(TemplateContent::new(1, None)).is_template());
        assert!(!Content::from(PlainTextContent::new("hi")).is_template());
    }

    #[test]
    fn test_html_serializes_flat() -> TestResult {
        let value = serde_json::to_value(Content::from(HtmlContent::new("<p>hi</p>")))?;

        assert_eq!(value, json!({ "htmlContent": "<p>hi</p>" }));

        Ok(())
    }

    #[test]
    fn test_plain_text_serializes_flat() -> TestResult {
        let value = serde_json::to_value(Content::from(PlainTextContent::new("hi")))?;

        assert_eq!(value, json!({ "textContent": "hi" }));

        Ok(())
    }

    #[test]
    fn test_template_serializes_params() -> TestResult {
        let mut params = Map::new();
        params.insert("name".to_string(), json!("John"));
        params.insert("orders".to_string(), json!([1, 2]));

        let value = serde_json::to_value(Content::from(TemplateContent::new(7, Some(params))))?;

        assert_eq!(
            value,
            json!({ "templateId": 7, "params": { "name": "John", "orders": [1, 2] } })
        );

        Ok(())
    }

    #[test]
    fn test_template_omits_missing_or_empty_params() -> TestResult {
        let missing = serde_json::to_value(TemplateContent::new(7, None))?;
        let empty = serde_json::to_value(TemplateContent::new(7, Some(Map::new())))?;

        assert_eq!(missing, json!({ "templateId": 7 }));
        assert_eq!(empty, json!({ "templateId": 7 }));

        Ok(())
    }
}
