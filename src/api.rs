//! Registration endpoint boundary: request/response types and the HTTP client.

use crate::config::Config;
use crate::error::RegistrationError;
use crate::form::FieldErrors;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// JSON body of a registration request.
///
/// The repeated password is never part of it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A request body together with the locale it is sent in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub body: RegistrationRequest,
    pub locale: Locale,
}

/// Body of a `400 Bad Request` validation rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub validation_errors: HashMap<String, String>,
}

/// Anything that can carry a submission to the registration service.
///
/// The returned future owns everything it needs so it can be spawned.
pub trait RegistrationEndpoint: Send + Sync {
    fn register(&self, submission: Submission) -> BoxFuture<'static, Result<(), RegistrationError>>;
}

/// Registration endpoint reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistrationEndpoint {
    pub fn new(client: reqwest::Client, base_url: &str, path: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        }
    }

    /// Build the endpoint from configuration, applying the optional timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::new(client, &config.registration_base_url, &config.registration_path))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RegistrationEndpoint for HttpRegistrationEndpoint {
    fn register(&self, submission: Submission) -> BoxFuture<'static, Result<(), RegistrationError>> {
        Box::pin(post_registration(
            self.client.clone(),
            self.url.clone(),
            submission,
        ))
    }
}

async fn post_registration(
    client: reqwest::Client,
    url: String,
    submission: Submission,
) -> Result<(), RegistrationError> {
    debug!("POST {} (Accept-Language: {})", url, submission.locale);

    let response = client
        .post(&url)
        .header(ACCEPT_LANGUAGE, submission.locale.code())
        .json(&submission.body)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::BAD_REQUEST {
        let body = response.text().await?;
        return parse_validation_errors(status, &body);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Registration endpoint returned {}: {}", status, body);
    Err(RegistrationError::UnexpectedStatus(status))
}

/// Interpret a 400 body. Always returns `Err`: either field errors or a
/// malformed-response failure.
fn parse_validation_errors(status: StatusCode, body: &str) -> Result<(), RegistrationError> {
    match serde_json::from_str::<ValidationErrorResponse>(body) {
        Ok(parsed) => Err(RegistrationError::Validation(FieldErrors::from_server(
            parsed.validation_errors,
        ))),
        Err(e) => Err(RegistrationError::MalformedResponse {
            status,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_submission(locale: Locale) -> Submission {
        Submission {
            body: RegistrationRequest {
                username: "GoodUser".to_string(),
                email: "my-email@host.com".to_string(),
                password: "myPassword@123".to_string(),
            },
            locale,
        }
    }

    fn endpoint_for(server: &MockServer) -> HttpRegistrationEndpoint {
        HttpRegistrationEndpoint::new(reqwest::Client::new(), &server.uri(), "/api/1.0/users")
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_request_serializes_exact_fields() {
        let json = serde_json::to_value(create_submission(Locale::EN).body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "username": "GoodUser",
                "email": "my-email@host.com",
                "password": "myPassword@123"
            })
        );
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let debug = format!("{:?}", create_submission(Locale::EN).body);

        assert!(debug.contains("GoodUser"));
        assert!(!debug.contains("myPassword@123"));
    }

    #[test]
    fn test_validation_response_deserialization() {
        let json = r#"{"validationErrors": {"username": "Username cannot be null"}}"#;

        let parsed: ValidationErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.validation_errors.get("username").map(String::as_str),
            Some("Username cannot be null")
        );
    }

    #[test]
    fn test_parse_validation_errors_without_payload_is_malformed() {
        let result = parse_validation_errors(StatusCode::BAD_REQUEST, r#"{"message": "nope"}"#);
        assert!(matches!(
            result,
            Err(RegistrationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let endpoint =
            HttpRegistrationEndpoint::new(reqwest::Client::new(), "http://host:8080/", "/api/1.0/users");
        assert_eq!(endpoint.url(), "http://host:8080/api/1.0/users");
    }

    // ==================== HTTP Tests ====================

    #[tokio::test]
    async fn test_register_success_sends_body_and_language() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/1.0/users"))
            .and(header("Accept-Language", "pt-BR"))
            .and(body_json(serde_json::json!({
                "username": "GoodUser",
                "email": "my-email@host.com",
                "password": "myPassword@123"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = endpoint_for(&mock_server)
            .register(create_submission(Locale::PT_BR))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_any_2xx_is_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = endpoint_for(&mock_server)
            .register(create_submission(Locale::EN))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "validationErrors": {
                    "username": "Username cannot be null",
                    "email": "E-mail in use"
                }
            })))
            .mount(&mock_server)
            .await;

        let err = endpoint_for(&mock_server)
            .register(create_submission(Locale::EN))
            .await
            .unwrap_err();

        let errors = err.field_errors().expect("validation errors");
        assert_eq!(errors.get(Field::Username), Some("Username cannot be null"));
        assert_eq!(errors.get(Field::Email), Some("E-mail in use"));
    }

    #[tokio::test]
    async fn test_register_server_error_is_unexpected_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let err = endpoint_for(&mock_server)
            .register(create_submission(Locale::EN))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RegistrationError::UnexpectedStatus(StatusCode::BAD_GATEWAY)
        ));
        assert!(err.field_errors().is_none());
    }

    #[tokio::test]
    async fn test_register_unreachable_is_transport_error() {
        let mock_server = MockServer::start().await;
        let endpoint = endpoint_for(&mock_server);
        drop(mock_server);

        let err = endpoint
            .register(create_submission(Locale::EN))
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationError::Transport(_)));
    }
}
