//! Transactional email API mailer

use std::fmt;

use async_trait::async_trait;
use clap::Parser;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::communication::{Email, HttpError, Mailer, MailerError};

/// Transactional email API configuration
#[derive(Clone, Parser)]
pub struct ApiMailerConfig {
    /// The API key sent with every request
    #[clap(long, env = "MAIL_API_KEY")]
    pub api_key: String,

    /// The base URL of the API
    #[clap(long = "api-base-url", env = "MAIL_API_BASE_URL", default_value = "https://api.brevo.com")]
    pub base_url: String,

    /// The API version
    #[clap(long, env = "MAIL_API_VERSION", default_value = "v3")]
    pub api_version: String,
}

impl ApiMailerConfig {
    /// Gets the URL of the send endpoint
    pub fn send_url(&self) -> String {
        format!(
            "{}/{}/smtp/email",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

impl fmt::Debug for ApiMailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiMailerConfig")
            .field("api_key", &"********")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: String,
}

/// Mailer that posts emails to the provider's HTTP API
#[derive(Debug, Clone)]
pub struct ApiMailer {
    config: ApiMailerConfig,
    client: Client,
}

impl ApiMailer {
    /// Create a new API mailer
    pub fn new(config: ApiMailerConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new API mailer using an existing HTTP client
    pub fn with_client(config: ApiMailerConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl Mailer for ApiMailer {
    async fn send_email(&self, email: &Email) -> Result<String, MailerError> {
        email.validate()?;

        let payload = email.to_payload()?;
        let url = self.config.send_url();

        debug!(%url, recipients = email.to().len(), "sending email");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header("api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            let mut error = serde_json::from_str::<HttpError>(&body).unwrap_or(HttpError {
                message: body,
                ..HttpError::default()
            });
            error.status = status.as_u16();

            warn!(status = error.status, code = %error.code, "provider refused email");

            return Err(error.into());
        }

        let SendEmailResponse { message_id } = response.json().await?;

        debug!(%message_id, "email sent");

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::domain::communication::{Contact, ValidationError};

    use super::*;

    fn config(base_url: &str) -> ApiMailerConfig {
        ApiMailerConfig {
            api_key: "xkeysib-test".to_string(),
            base_url: base_url.to_string(),
            api_version: "v3".to_string(),
        }
    }

    fn email() -> Email {
        Email::builder()
            .from(Contact::new("a@x.io", Some("A")))
            .append_to(Contact::new("b@x.io", None))
            .subject("Hello")
            .reply_to(Contact::new("a@x.io", Some("A")))
            .body()
            .plain_text("hi")
            .build()
    }

    #[test]
    fn test_send_url() {
        assert_eq!(
            config("https://api.brevo.com/").send_url(),
            "https://api.brevo.com/v3/smtp/email"
        );
    }

    #[test]
    fn test_config_debug_hides_api_key() {
        let debug = format!("{:?}", config("https://api.brevo.com"));

        assert!(!debug.contains("xkeysib-test"));
        assert!(debug.contains("********"));
    }

    #[test]
    fn test_config_from_args() -> TestResult {
        let config = ApiMailerConfig::try_parse_from(["mailpost", "--api-key", "xkeysib-test"])?;

        assert_eq!(config.base_url, "https://api.brevo.com");
        assert_eq!(config.api_version, "v3");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/smtp/email"))
            .and(header("api-key", "xkeysib-test"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "sender": { "email": "a@x.io", "name": "A" },
                "to": [{ "email": "b@x.io" }],
                "subject": "Hello",
                "replyTo": { "email": "a@x.io", "name": "A" },
                "textContent": "hi",
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "messageId": "<201798300811.5787683@relay.example.com>" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ApiMailer::new(config(&server.uri()));

        let message_id = mailer.send_email(&email()).await?;

        assert_eq!(message_id, "<201798300811.5787683@relay.example.com>");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/smtp/email"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "invalid_parameter",
                "message": "email is not valid in to",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ApiMailer::new(config(&server.uri()));

        let result = mailer.send_email(&email()).await;

        match result {
            Err(MailerError::Http(err)) => {
                assert_eq!(err.status, 400);
                assert_eq!(err.code, "invalid_parameter");
                assert_eq!(err.message, "email is not valid in to");
            }
            other => panic!("expected an http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_email_is_not_sent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mailer = ApiMailer::new(config(&server.uri()));
        let email = Email::builder()
            .append_to(Contact::new("b@x.io", None))
            .body()
            .plain_text("hi")
            .build();

        let result = mailer.send_email(&email).await;

        assert!(matches!(
            result,
            Err(MailerError::Validation(ValidationError::FromRequired))
        ));
    }

    #[tokio::test]
    async fn test_unstructured_error_body_keeps_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let mailer = ApiMailer::new(config(&server.uri()));

        let result = mailer.send_email(&email()).await;

        match result {
            Err(MailerError::Http(err)) => {
                assert_eq!(err.status, 500);
                assert_eq!(err.code, "");
                assert_eq!(err.message, "upstream unavailable");
            }
            other => panic!("expected an http error, got {other:?}"),
        }
    }
}
